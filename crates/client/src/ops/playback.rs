// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Playback transport operations.

use crate::define_op;
use crate::operation::{NoRequest, Operation};
use crate::proto::{
    CommandId, CommandStatus, GetPlaybackModeResponse, GetRecordModeResponse,
    GetTransportArmedResponse, GetTransportStateResponse, PlaybackMode, SetPlaybackModeRequest,
    SetRecordModeRequest,
};

define_op! {
    /// Reads the current transport state.
    pub struct GetTransportState => CommandId::GetTransportState,
        response: GetTransportStateResponse;
}

define_op! {
    /// Reads the transport record-arm state.
    pub struct GetTransportArmed => CommandId::GetTransportArmed,
        response: GetTransportArmedResponse;
}

/// Reads the active playback modes.
///
/// Hand-written: the host emits `current_modes` entries as bare
/// ordinals where the contract names symbolic values, so
/// `repair_response` maps them back before structural parsing.
#[derive(Debug, Default)]
pub struct GetPlaybackMode {
    /// Recorded by the client; write-once per run.
    pub status: Option<CommandStatus>,
    /// Delivered response body.
    pub response: Option<GetPlaybackModeResponse>,
}

impl GetPlaybackMode {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Operation for GetPlaybackMode {
    type Request = NoRequest;
    type Response = GetPlaybackModeResponse;

    const COMMAND: CommandId = CommandId::GetPlaybackMode;
    const HAS_RESPONSE: bool = true;

    fn request(&self) -> Option<&Self::Request> {
        None
    }

    fn repair_response(&self, json: String) -> String {
        let Ok(mut value) = serde_json::from_str::<serde_json::Value>(&json) else {
            return json;
        };
        if let Some(modes) = value.get_mut("current_modes").and_then(|m| m.as_array_mut()) {
            for entry in modes.iter_mut() {
                let mode = entry
                    .as_i64()
                    .and_then(|ordinal| i32::try_from(ordinal).ok())
                    .and_then(PlaybackMode::from_ordinal);
                if let Some(mode) = mode {
                    *entry = mode.wire_name().into();
                }
            }
        }
        serde_json::to_string(&value).unwrap_or(json)
    }

    fn record_status(&mut self, status: CommandStatus) {
        self.status = Some(status);
    }

    fn on_response(&mut self, body: Self::Response) {
        self.response = Some(body);
    }
}

define_op! {
    /// Sets the playback mode.
    pub struct SetPlaybackMode => CommandId::SetPlaybackMode, request: SetPlaybackModeRequest;
}

define_op! {
    /// Reads the transport record mode.
    pub struct GetRecordMode => CommandId::GetRecordMode, response: GetRecordModeResponse;
}

define_op! {
    /// Sets the transport record mode.
    pub struct SetRecordMode => CommandId::SetRecordMode, request: SetRecordModeRequest;
}

define_op! {
    /// Toggles between play and stop.
    pub struct TogglePlayState => CommandId::TogglePlayState;
}

define_op! {
    /// Toggles record enable.
    pub struct ToggleRecordEnable => CommandId::ToggleRecordEnable;
}

#[cfg(test)]
#[path = "playback_tests.rs"]
mod tests;
