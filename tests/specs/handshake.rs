// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Connection and handshake specs.

use oplink_client::{Client, ClientConfig, ClientError, Credential};
use oplink_proto::{CommandError, CommandId, ErrorCode, ResponseEnvelope};

use super::prelude::*;

fn token_config(host: &MockHost, file: &tempfile::NamedTempFile) -> ClientConfig {
    ClientConfig::new(Credential::api_token(file.path())).address(host.address())
}

#[test]
fn connect_probes_then_authenticates() {
    let host = MockHost::serve(vec![ready_response(), authorized_response("sess-e2e")]);
    let file = token_file("e2e-token");

    let mut client = Client::connect(token_config(&host, &file)).unwrap();
    assert!(client.is_authenticated());
    assert_eq!(client.session_id(), "sess-e2e");
    client.close();

    let requests = host.finish();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].header.command, CommandId::HostReadyCheck.code());
    assert_eq!(requests[0].header.session_id, "");
    assert_eq!(requests[0].header.version, 1);
    assert_eq!(requests[0].header.task_id, "");
    assert_eq!(requests[1].header.command, CommandId::AuthorizeConnection.code());
    assert!(requests[1].request_body_json.contains("e2e-token"));
}

#[test]
fn failed_readiness_probe_aborts_and_closes_the_socket() {
    let error = CommandError::new(ErrorCode::HostBusy, "still launching");
    let host = MockHost::serve(vec![
        ResponseEnvelope::failed(CommandId::HostReadyCheck, serde_json::to_string(&error).unwrap()),
        // Never reached; the client must hang up after the probe
        ready_response(),
    ]);
    let file = token_file("e2e-token");

    let result = Client::connect(token_config(&host, &file));
    match result {
        Err(ClientError::RemoteNotReady { message }) => assert_eq!(message, "still launching"),
        other => panic!("expected RemoteNotReady, got {other:?}"),
    }

    // The host saw only the probe before the connection dropped
    let requests = host.finish();
    assert_eq!(requests.len(), 1);
}

#[test]
fn denied_authentication_still_yields_a_usable_client() {
    let host = MockHost::serve(vec![
        ready_response(),
        denied_response("certificate revoked"),
        ready_response(),
    ]);
    let file = token_file("e2e-token");

    let mut client = Client::connect(token_config(&host, &file)).unwrap();
    assert!(!client.is_authenticated());
    assert_eq!(client.session_id(), "");

    // Unauthenticated probes still work; the remote end does the rejecting
    client.run(&mut oplink_client::ops::HostReadyCheck::new()).unwrap();
    client.close();

    let requests = host.finish();
    assert_eq!(requests[2].header.session_id, "");
}

#[test]
fn registration_handshake_reaches_the_host() {
    let body = oplink_proto::RegisterConnectionResponse {
        is_authorized: true,
        session_id: "sess-reg".to_string(),
        message: String::new(),
    };
    let host = MockHost::serve(vec![
        ready_response(),
        ResponseEnvelope::completed(
            CommandId::RegisterConnection,
            serde_json::to_string(&body).unwrap(),
        ),
    ]);
    let config = ClientConfig::new(Credential::registration("Alfred Jean", "oplink"))
        .address(host.address());

    let client = Client::connect(config).unwrap();
    assert_eq!(client.session_id(), "sess-reg");
    drop(client);

    let requests = host.finish();
    assert_eq!(requests[1].header.command, CommandId::RegisterConnection.code());
}

#[test]
fn unreachable_host_is_a_transport_failure() {
    // Port 9 on localhost; nothing listens there
    let config = ClientConfig::new(Credential::api_token("/nonexistent"))
        .address("127.0.0.1:9");
    assert!(matches!(Client::connect(config), Err(ClientError::Transport(_))));
}
