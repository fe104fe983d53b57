// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operation contract: one typed command descriptor per host command.

use oplink_proto::{CommandId, CommandStatus};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Marker request type for commands that send no body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NoRequest {}

/// Marker response type for commands that declare no response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub struct NoBody {}

/// One command's typed request/response pairing plus its behavior hooks.
///
/// The client orchestrator is generic over this trait: extending the
/// protocol adds an implementation, never touches the orchestrator.
/// An operation must not read or mutate client state; it only mutates
/// its own response and status fields. Instances are single-use:
/// re-running one is undefined.
pub trait Operation {
    /// Typed request body; [`NoRequest`] for request-less commands.
    type Request: Serialize;
    /// Declared response body type; [`NoBody`] when none is declared.
    type Response: DeserializeOwned;

    /// Command this operation executes.
    const COMMAND: CommandId;
    /// Whether a response body type is declared.
    const HAS_RESPONSE: bool;

    /// The typed request to marshal, if any.
    fn request(&self) -> Option<&Self::Request>;

    /// Patch known request-encoding irregularities in the marshaled
    /// JSON before it is sent. Identity unless overridden.
    fn repair_request(&self, json: String) -> String {
        json
    }

    /// Patch known response-encoding irregularities in the received
    /// JSON before structural parsing. Identity unless overridden.
    fn repair_response(&self, json: String) -> String {
        json
    }

    /// Record the response status. Called exactly once per run, before
    /// any delivery or error.
    fn record_status(&mut self, status: CommandStatus);

    /// Deliver the parsed response body. Called only when a body is
    /// present and `HAS_RESPONSE` is true.
    fn on_response(&mut self, body: Self::Response);

    /// Deliver the empty-response notification.
    fn on_empty_response(&mut self) {}
}

/// Define a plain operation: a struct holding its request (if any),
/// recorded status, and delivered response (if declared), wired to the
/// [`Operation`] contract.
///
/// Operations that override a repair hook are written out by hand
/// instead; see `ops::CreateSession` and `ops::GetPlaybackMode`.
///
/// ```ignore
/// define_op! {
///     /// Reads the name of the open session.
///     pub struct GetSessionName => CommandId::GetSessionName,
///         response: GetSessionNameResponse;
/// }
/// ```
#[macro_export]
macro_rules! define_op {
    // No request, no response
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $command:expr;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        pub struct $name {
            /// Recorded by the client; write-once per run.
            pub status: Option<$crate::proto::CommandStatus>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl $crate::Operation for $name {
            type Request = $crate::NoRequest;
            type Response = $crate::NoBody;

            const COMMAND: $crate::proto::CommandId = $command;
            const HAS_RESPONSE: bool = false;

            fn request(&self) -> Option<&Self::Request> {
                None
            }

            fn record_status(&mut self, status: $crate::proto::CommandStatus) {
                self.status = Some(status);
            }

            fn on_response(&mut self, _body: Self::Response) {}
        }
    };

    // Request only
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $command:expr, request: $request:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name {
            pub request: $request,
            /// Recorded by the client; write-once per run.
            pub status: Option<$crate::proto::CommandStatus>,
        }

        impl $name {
            pub fn new(request: $request) -> Self {
                Self { request, status: None }
            }
        }

        impl $crate::Operation for $name {
            type Request = $request;
            type Response = $crate::NoBody;

            const COMMAND: $crate::proto::CommandId = $command;
            const HAS_RESPONSE: bool = false;

            fn request(&self) -> Option<&Self::Request> {
                Some(&self.request)
            }

            fn record_status(&mut self, status: $crate::proto::CommandStatus) {
                self.status = Some(status);
            }

            fn on_response(&mut self, _body: Self::Response) {}
        }
    };

    // Response only
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $command:expr, response: $response:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        pub struct $name {
            /// Recorded by the client; write-once per run.
            pub status: Option<$crate::proto::CommandStatus>,
            /// Delivered response body.
            pub response: Option<$response>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl $crate::Operation for $name {
            type Request = $crate::NoRequest;
            type Response = $response;

            const COMMAND: $crate::proto::CommandId = $command;
            const HAS_RESPONSE: bool = true;

            fn request(&self) -> Option<&Self::Request> {
                None
            }

            fn record_status(&mut self, status: $crate::proto::CommandStatus) {
                self.status = Some(status);
            }

            fn on_response(&mut self, body: Self::Response) {
                self.response = Some(body);
            }
        }
    };

    // Request and response
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $command:expr, request: $request:ty, response: $response:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name {
            pub request: $request,
            /// Recorded by the client; write-once per run.
            pub status: Option<$crate::proto::CommandStatus>,
            /// Delivered response body.
            pub response: Option<$response>,
        }

        impl $name {
            pub fn new(request: $request) -> Self {
                Self { request, status: None, response: None }
            }
        }

        impl $crate::Operation for $name {
            type Request = $request;
            type Response = $response;

            const COMMAND: $crate::proto::CommandId = $command;
            const HAS_RESPONSE: bool = true;

            fn request(&self) -> Option<&Self::Request> {
                Some(&self.request)
            }

            fn record_status(&mut self, status: $crate::proto::CommandStatus) {
                self.status = Some(status);
            }

            fn on_response(&mut self, body: Self::Response) {
                self.response = Some(body);
            }
        }
    };
}

#[cfg(test)]
#[path = "operation_tests.rs"]
mod tests;
