// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Connection and authentication command bodies.

use serde::{Deserialize, Serialize};

/// Request body of `AuthorizeConnection` (token handshake).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizeConnectionRequest {
    /// API token read from the credential file.
    pub auth_string: String,
}

/// Response body of `AuthorizeConnection`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizeConnectionResponse {
    #[serde(default)]
    pub is_authorized: bool,
    /// Session token to attach to every later request; empty when denied.
    #[serde(default)]
    pub session_id: String,
    /// Human-readable denial reason; empty on success.
    #[serde(default)]
    pub message: String,
}

/// Request body of `RegisterConnection` (registration handshake).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterConnectionRequest {
    pub company_name: String,
    pub application_name: String,
}

/// Response body of `RegisterConnection`. Same contract as the token
/// handshake response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterConnectionResponse {
    #[serde(default)]
    pub is_authorized: bool,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub message: String,
}

/// Response body of `GetVersion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetVersionResponse {
    /// Scripting protocol version running on the host.
    pub version: i32,
}
