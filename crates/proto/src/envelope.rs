// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request and response envelopes.
//!
//! An envelope is the outer `{header, body}` structure carrying one
//! request or one response. Bodies travel as embedded JSON text, not as
//! nested structures, so the envelope layer stays schema-agnostic.

use serde::{Deserialize, Serialize};

use crate::CommandId;

/// Protocol version attached to every request header.
pub const PROTOCOL_VERSION: i32 = 1;

/// Header of a request envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestHeader {
    /// Reserved for future async correlation; always empty today.
    #[serde(default)]
    pub task_id: String,
    /// Session token; empty until authentication succeeds.
    #[serde(default)]
    pub session_id: String,
    /// Wire value of the command id.
    pub command: i32,
    /// Protocol version, currently [`PROTOCOL_VERSION`].
    pub version: i32,
}

/// One command request. Built fresh per call, immutable once sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    pub header: RequestHeader,
    /// UTF-8 JSON text of the typed request body, or empty.
    #[serde(default)]
    pub request_body_json: String,
}

/// Header of a response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseHeader {
    #[serde(default)]
    pub task_id: String,
    pub command: i32,
    /// Raw status code; classify with [`CommandStatus::from_code`].
    pub status: i32,
}

/// One command response.
///
/// Exactly one of the two body fields is populated: `response_body_json`
/// on success, `response_error_json` on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub header: ResponseHeader,
    #[serde(default)]
    pub response_body_json: String,
    #[serde(default)]
    pub response_error_json: String,
}

/// Classified outcome of one command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Completed,
    Failed,
    /// Any status outside the two terminal values. Reserved codes exist
    /// in the contract; observing one is a protocol-invariant violation.
    Other(i32),
}

impl CommandStatus {
    /// Wire value of the `Completed` status.
    pub const COMPLETED: i32 = 2;
    /// Wire value of the `Failed` status.
    pub const FAILED: i32 = 3;

    pub fn from_code(code: i32) -> Self {
        match code {
            Self::COMPLETED => Self::Completed,
            Self::FAILED => Self::Failed,
            other => Self::Other(other),
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Completed => Self::COMPLETED,
            Self::Failed => Self::FAILED,
            Self::Other(code) => code,
        }
    }
}

impl RequestEnvelope {
    /// Build a request for `command` with the given session token and
    /// marshaled body text.
    pub fn new(command: CommandId, session_id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            header: RequestHeader {
                task_id: String::new(),
                session_id: session_id.into(),
                command: command.code(),
                version: PROTOCOL_VERSION,
            },
            request_body_json: body.into(),
        }
    }
}

impl ResponseEnvelope {
    /// Build a `Completed` response carrying `body` (may be empty).
    pub fn completed(command: CommandId, body: impl Into<String>) -> Self {
        Self {
            header: ResponseHeader {
                task_id: String::new(),
                command: command.code(),
                status: CommandStatus::COMPLETED,
            },
            response_body_json: body.into(),
            response_error_json: String::new(),
        }
    }

    /// Build a `Failed` response carrying `error_json`.
    pub fn failed(command: CommandId, error_json: impl Into<String>) -> Self {
        Self {
            header: ResponseHeader {
                task_id: String::new(),
                command: command.code(),
                status: CommandStatus::FAILED,
            },
            response_body_json: String::new(),
            response_error_json: error_json.into(),
        }
    }

    /// Classified status of this response.
    pub fn status(&self) -> CommandStatus {
        CommandStatus::from_code(self.header.status)
    }
}

#[cfg(test)]
#[path = "envelope_tests.rs"]
mod tests;
