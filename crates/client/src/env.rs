// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the client crate.

/// Default host address when `OPLINK_ADDRESS` is unset.
pub const DEFAULT_ADDRESS: &str = "localhost:31416";

/// Resolve the host address: `OPLINK_ADDRESS` > default.
pub fn address() -> String {
    std::env::var("OPLINK_ADDRESS")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_ADDRESS.to_string())
}

/// Audit trail toggle (`OPLINK_AUDIT=1` or `true`). Off by default.
pub fn audit_enabled() -> bool {
    matches!(std::env::var("OPLINK_AUDIT").ok().as_deref(), Some("1") | Some("true"))
}
