// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy for the client layer.

use oplink_proto::{CommandError, CommandId, ProtocolError};
use thiserror::Error;

/// Errors from establishing or using the connection.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection could not be established; the host may not be running.
    #[error("host unavailable at {address}: {source}")]
    Unavailable {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// Framing or encoding failure on an established connection.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

/// Errors surfaced by [`crate::Client`] and [`crate::Engine`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection could not be established or was lost mid-call. Fatal;
    /// the client closes and propagates.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The readiness probe failed; construction is aborted and the
    /// connection torn down.
    #[error("remote host not ready: {message}")]
    RemoteNotReady { message: String },

    /// The credential input could not be read.
    #[error("credential unusable: {0}")]
    Credential(#[from] std::io::Error),

    /// The remote executed the command and explicitly failed it. The
    /// sole normal-path error from `run`; the code is already
    /// normalized to its integer encoding.
    #[error("command failed: {}: {}", .0.code(), .0.message)]
    CommandFailed(CommandError),

    /// Response status outside {Completed, Failed}. Unrecoverable
    /// protocol defect; never absorbed.
    #[error("protocol invariant violated: unexpected status {status}")]
    ProtocolViolation { status: i32 },

    /// A body failed to marshal or to parse structurally.
    #[error("bad {context} payload: {source}")]
    BadPayload {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A command that declares a response body completed without one.
    #[error("{command} returned no response body")]
    EmptyResponse { command: CommandId },

    /// The client has been closed; commands are rejected, never
    /// silently resent.
    #[error("client is closed")]
    Closed,
}

impl ClientError {
    /// The normalized command error, when this is a command failure.
    pub fn command_error(&self) -> Option<&CommandError> {
        match self {
            Self::CommandFailed(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
