// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Concrete operation catalogue, one type per host command.

mod edit;
mod playback;
mod session;
mod system;

pub use edit::{
    Clear, ClearSpecial, Copy, CopySpecial, Cut, CutSpecial, Paste, PasteSpecial,
    RenameTargetTrack, SelectAllClipsOnTrack, TrimToSelection,
};
pub use playback::{
    GetPlaybackMode, GetRecordMode, GetTransportArmed, GetTransportState, SetPlaybackMode,
    SetRecordMode, TogglePlayState, ToggleRecordEnable,
};
pub use session::{
    CloseSession, CreateSession, GetSessionAudioFormat, GetSessionLength, GetSessionName,
    GetSessionPath, GetSessionSampleRate, GetSessionStartTime, OpenSession, SaveSession,
    SaveSessionAs,
};
pub use system::{AuthorizeConnection, GetVersion, HostReadyCheck, RegisterConnection};
