// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session lifecycle and property operations.

use crate::define_op;
use crate::operation::{NoBody, Operation};
use crate::proto::{
    CloseSessionRequest, CommandId, CommandStatus, CreateSessionRequest,
    GetSessionAudioFormatResponse, GetSessionLengthResponse, GetSessionNameResponse,
    GetSessionPathResponse, GetSessionSampleRateResponse, GetSessionStartTimeResponse,
    OpenSessionRequest, SaveSessionAsRequest,
};

/// Creates a new session on the host.
///
/// Hand-written: the host rejects the symbolic `file_type` name in this
/// request and expects the bare ordinal, so `repair_request` rewrites
/// that one field after marshaling.
#[derive(Debug)]
pub struct CreateSession {
    pub request: CreateSessionRequest,
    /// Recorded by the client; write-once per run.
    pub status: Option<CommandStatus>,
}

impl CreateSession {
    pub fn new(request: CreateSessionRequest) -> Self {
        Self { request, status: None }
    }
}

impl Operation for CreateSession {
    type Request = CreateSessionRequest;
    type Response = NoBody;

    const COMMAND: CommandId = CommandId::CreateSession;
    const HAS_RESPONSE: bool = false;

    fn request(&self) -> Option<&Self::Request> {
        Some(&self.request)
    }

    fn repair_request(&self, json: String) -> String {
        let Ok(mut value) = serde_json::from_str::<serde_json::Value>(&json) else {
            return json;
        };
        if let Some(object) = value.as_object_mut() {
            object.insert("file_type".to_string(), self.request.file_type.ordinal().into());
        }
        serde_json::to_string(&value).unwrap_or(json)
    }

    fn record_status(&mut self, status: CommandStatus) {
        self.status = Some(status);
    }

    fn on_response(&mut self, _body: Self::Response) {}
}

define_op! {
    /// Opens the session at a path.
    pub struct OpenSession => CommandId::OpenSession, request: OpenSessionRequest;
}

define_op! {
    /// Closes the open session, optionally saving first.
    pub struct CloseSession => CommandId::CloseSession, request: CloseSessionRequest;
}

define_op! {
    /// Saves the open session in place.
    pub struct SaveSession => CommandId::SaveSession;
}

define_op! {
    /// Saves the open session under a new name and location.
    pub struct SaveSessionAs => CommandId::SaveSessionAs, request: SaveSessionAsRequest;
}

define_op! {
    /// Reads the name of the open session.
    pub struct GetSessionName => CommandId::GetSessionName, response: GetSessionNameResponse;
}

define_op! {
    /// Reads the path of the open session.
    pub struct GetSessionPath => CommandId::GetSessionPath, response: GetSessionPathResponse;
}

define_op! {
    /// Reads the open session's sample rate.
    pub struct GetSessionSampleRate => CommandId::GetSessionSampleRate,
        response: GetSessionSampleRateResponse;
}

define_op! {
    /// Reads the open session's audio file format.
    pub struct GetSessionAudioFormat => CommandId::GetSessionAudioFormat,
        response: GetSessionAudioFormatResponse;
}

define_op! {
    /// Reads the open session's start timecode.
    pub struct GetSessionStartTime => CommandId::GetSessionStartTime,
        response: GetSessionStartTimeResponse;
}

define_op! {
    /// Reads the open session's length in the current timecode format.
    pub struct GetSessionLength => CommandId::GetSessionLength,
        response: GetSessionLengthResponse;
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
