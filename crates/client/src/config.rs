// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Constructor-time configuration.

use std::path::PathBuf;

use crate::env;

/// Credential supplied at connect time. Which variant is present selects
/// the authentication handshake; the two are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// Token handshake: read a plain API token from this file.
    ApiToken { path: PathBuf },
    /// Registration handshake: identify by company and application.
    Registration {
        company_name: String,
        application_name: String,
    },
}

impl Credential {
    pub fn api_token(path: impl Into<PathBuf>) -> Self {
        Self::ApiToken { path: path.into() }
    }

    pub fn registration(
        company_name: impl Into<String>,
        application_name: impl Into<String>,
    ) -> Self {
        Self::Registration {
            company_name: company_name.into(),
            application_name: application_name.into(),
        }
    }
}

/// Configuration for [`crate::Client::connect`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Host address, `host:port`.
    pub address: String,
    /// Whether the audit trail is written. Off by default.
    pub auditing: bool,
    pub credential: Credential,
}

impl ClientConfig {
    /// Configuration with environment defaults and the given credential.
    pub fn new(credential: Credential) -> Self {
        Self {
            address: env::address(),
            auditing: env::audit_enabled(),
            credential,
        }
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn auditing(mut self, enabled: bool) -> Self {
        self.auditing = enabled;
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
