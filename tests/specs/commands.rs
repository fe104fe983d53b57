// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command round-trip specs.

use oplink_client::{ops, Client, ClientConfig, ClientError, Credential, Engine};
use oplink_proto::{
    CommandId, ErrorCode, GetSessionNameResponse, GetVersionResponse, ResponseEnvelope,
};

use super::prelude::*;

/// Connected client plus the live host, past the handshake preamble.
fn connected(extra: Vec<ResponseEnvelope>) -> (Client, MockHost) {
    let mut responses = vec![ready_response(), authorized_response("sess-cmd")];
    responses.extend(extra);
    let host = MockHost::serve(responses);
    let file = token_file("cmd-token");
    let config = ClientConfig::new(Credential::api_token(file.path())).address(host.address());
    (Client::connect(config).unwrap(), host)
}

#[test]
fn typed_command_round_trips() {
    let body = GetSessionNameResponse { session_name: "Night Mix".to_string() };
    let (mut client, host) = connected(vec![ResponseEnvelope::completed(
        CommandId::GetSessionName,
        serde_json::to_string(&body).unwrap(),
    )]);

    let mut op = ops::GetSessionName::new();
    client.run(&mut op).unwrap();
    assert_eq!(op.response.unwrap().session_name, "Night Mix");
    client.close();

    let requests = host.finish();
    assert_eq!(requests[2].header.command, CommandId::GetSessionName.code());
    assert_eq!(requests[2].header.session_id, "sess-cmd");
    assert_eq!(requests[2].request_body_json, "");
}

#[test]
fn command_failure_carries_the_normalized_code() {
    let (mut client, host) = connected(vec![ResponseEnvelope::failed(
        CommandId::TrimToSelection,
        r#"{"command_error_type":"NoOpenSession","message":"open a session first"}"#,
    )]);

    let error = client.run(&mut ops::TrimToSelection::new()).unwrap_err();
    match error {
        ClientError::CommandFailed(command_error) => {
            assert_eq!(command_error.code(), ErrorCode::NoOpenSession);
            assert_eq!(command_error.message, "open a session first");
        }
        other => panic!("expected CommandFailed, got {other:?}"),
    }
    client.close();
    host.finish();
}

#[test]
fn sequence_advances_by_one_per_command() {
    let (mut client, host) = connected(vec![
        ResponseEnvelope::completed(CommandId::SaveSession, ""),
        ResponseEnvelope::completed(CommandId::SaveSession, ""),
    ]);

    let before = client.command_sequence();
    client.run(&mut ops::SaveSession::new()).unwrap();
    client.run(&mut ops::SaveSession::new()).unwrap();
    assert_eq!(client.command_sequence(), before + 2);

    client.close();
    host.finish();
}

#[test]
fn engine_methods_work_over_a_real_socket() {
    let version = GetVersionResponse { version: 2 };
    let (client, host) = connected(vec![
        ResponseEnvelope::completed(CommandId::GetVersion, serde_json::to_string(&version).unwrap()),
        ResponseEnvelope::completed(CommandId::TogglePlayState, ""),
    ]);

    let mut engine = Engine::with_client(client);
    assert_eq!(engine.version().unwrap(), 2);
    engine.toggle_play_state().unwrap();
    engine.close();

    let requests = host.finish();
    assert_eq!(requests.len(), 4);
    assert_eq!(requests[3].header.command, CommandId::TogglePlayState.code());
}

#[test]
fn run_after_close_never_touches_the_wire() {
    let (mut client, host) = connected(vec![]);
    client.close();

    let error = client.run(&mut ops::SaveSession::new()).unwrap_err();
    assert!(matches!(error, ClientError::Closed));

    // Handshake traffic only
    assert_eq!(host.finish().len(), 2);
}
