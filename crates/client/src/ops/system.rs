// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host and connection operations.

use crate::define_op;
use crate::proto::{
    AuthorizeConnectionRequest, AuthorizeConnectionResponse, CommandId, GetVersionResponse,
    RegisterConnectionRequest, RegisterConnectionResponse,
};

define_op! {
    /// Liveness probe. Answered by the host even before the connection
    /// is authenticated.
    pub struct HostReadyCheck => CommandId::HostReadyCheck;
}

define_op! {
    /// Reads the scripting protocol version running on the host.
    pub struct GetVersion => CommandId::GetVersion, response: GetVersionResponse;
}

define_op! {
    /// Token handshake: exchanges an API token for a session id.
    pub struct AuthorizeConnection => CommandId::AuthorizeConnection,
        request: AuthorizeConnectionRequest, response: AuthorizeConnectionResponse;
}

define_op! {
    /// Registration handshake: identifies the connecting application
    /// instead of presenting a token.
    pub struct RegisterConnection => CommandId::RegisterConnection,
        request: RegisterConnectionRequest, response: RegisterConnectionResponse;
}
