// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Message contract for the studio host scripting service.
//!
//! Wire format: 4-byte length prefix (big-endian) + JSON payload.
//! Command ids, status codes and error codes are part of the versioned
//! contract and must never be renumbered.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod auth;
mod command;
mod edit;
mod envelope;
mod error_code;
mod playback;
mod session;
mod wire;

pub use auth::{
    AuthorizeConnectionRequest, AuthorizeConnectionResponse, GetVersionResponse,
    RegisterConnectionRequest, RegisterConnectionResponse,
};
pub use command::{CommandId, UnknownCommand};
pub use edit::{
    AutomationData, ClearSpecialRequest, CopySpecialRequest, CutSpecialRequest, PasteOption,
    PasteSpecialRequest, RenameTargetTrackRequest, SelectAllClipsOnTrackRequest,
};
pub use envelope::{
    CommandStatus, RequestEnvelope, RequestHeader, ResponseEnvelope, ResponseHeader,
    PROTOCOL_VERSION,
};
pub use error_code::{CommandError, ErrorCode};
pub use playback::{
    GetPlaybackModeResponse, GetRecordModeResponse, GetTransportArmedResponse,
    GetTransportStateResponse, PlaybackMode, RecordMode, SetPlaybackModeRequest,
    SetRecordModeRequest, TransportState,
};
pub use session::{
    BitDepth, CloseSessionRequest, CreateSessionRequest, GetSessionAudioFormatResponse,
    GetSessionLengthResponse, GetSessionNameResponse, GetSessionPathResponse,
    GetSessionSampleRateResponse, GetSessionStartTimeResponse, IoSettings, OpenSessionRequest,
    SampleRate, SaveSessionAsRequest, SessionAudioFormat,
};
pub use wire::{decode, encode, read_message, write_message, ProtocolError, MAX_FRAME_LEN};
