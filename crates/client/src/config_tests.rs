// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use super::*;

#[test]
fn api_token_credential_holds_the_path() {
    let credential = Credential::api_token("/keys/host.token");
    assert_eq!(
        credential,
        Credential::ApiToken { path: PathBuf::from("/keys/host.token") }
    );
}

#[test]
fn registration_credential_holds_both_identifiers() {
    let credential = Credential::registration("Alfred Jean", "oplink");
    assert_eq!(
        credential,
        Credential::Registration {
            company_name: "Alfred Jean".to_string(),
            application_name: "oplink".to_string(),
        }
    );
}

#[test]
fn builders_override_the_defaults() {
    let config = Credential::api_token("/k");
    let config = ClientConfig::new(config).address("studio:40401").auditing(true);
    assert_eq!(config.address, "studio:40401");
    assert!(config.auditing);
}

#[test]
fn auditing_defaults_off() {
    // OPLINK_AUDIT is unset in the test environment
    let config = ClientConfig::new(Credential::api_token("/k"));
    assert!(!config.auditing);
}
