// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error codes carried by failure envelopes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error code of a failed command.
///
/// Discriminants are the wire values. The host is known to emit the code
/// in three encodings (bare integer, numeric string, symbolic name);
/// the client layer normalizes everything to the integer before
/// structural parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    UnknownError = 0,
    InvalidParameter = 1,
    NoOpenSession = 2,
    HostBusy = 3,
    Unauthorized = 4,
    SessionPathInvalid = 5,
    FileNotFound = 6,
    TrackNotFound = 7,
    ClipNotFound = 8,
    OperationTimedOut = 9,
    UnsupportedCommand = 10,
    InternalError = 11,
}

impl ErrorCode {
    const ALL: &'static [ErrorCode] = &[
        Self::UnknownError,
        Self::InvalidParameter,
        Self::NoOpenSession,
        Self::HostBusy,
        Self::Unauthorized,
        Self::SessionPathInvalid,
        Self::FileNotFound,
        Self::TrackNotFound,
        Self::ClipNotFound,
        Self::OperationTimedOut,
        Self::UnsupportedCommand,
        Self::InternalError,
    ];

    pub fn code(self) -> i32 {
        self as i32
    }

    /// Symbolic name as it appears on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Self::UnknownError => "UnknownError",
            Self::InvalidParameter => "InvalidParameter",
            Self::NoOpenSession => "NoOpenSession",
            Self::HostBusy => "HostBusy",
            Self::Unauthorized => "Unauthorized",
            Self::SessionPathInvalid => "SessionPathInvalid",
            Self::FileNotFound => "FileNotFound",
            Self::TrackNotFound => "TrackNotFound",
            Self::ClipNotFound => "ClipNotFound",
            Self::OperationTimedOut => "OperationTimedOut",
            Self::UnsupportedCommand => "UnsupportedCommand",
            Self::InternalError => "InternalError",
        }
    }

    /// Resolve an integer code; unknown values degrade to `UnknownError`.
    pub fn from_code(code: i32) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.code() == code)
            .unwrap_or(Self::UnknownError)
    }

    /// Resolve a symbolic name; `None` if the name is not in the contract.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

/// Error payload of a `Failed` response envelope, after normalization.
///
/// Fields default rather than fail: a malformed failure payload still
/// produces a `CommandError` (code `UnknownError`, empty message) instead
/// of an error inside the error path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandError {
    #[serde(default)]
    pub command_error_type: i32,
    #[serde(default)]
    pub message: String,
}

impl CommandError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self { command_error_type: code.code(), message: message.into() }
    }

    /// Classified error code.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::from_code(self.command_error_type)
    }
}

#[cfg(test)]
#[path = "error_code_tests.rs"]
mod tests;
