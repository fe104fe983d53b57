// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use oplink_proto::{CommandId, CommandStatus, OpenSessionRequest};

use super::*;
use crate::ops;

#[test]
fn plain_op_declares_neither_request_nor_response() {
    let op = ops::SaveSession::new();
    assert_eq!(ops::SaveSession::COMMAND, CommandId::SaveSession);
    assert!(!ops::SaveSession::HAS_RESPONSE);
    assert!(op.request().is_none());
    assert!(op.status.is_none());
}

#[test]
fn request_op_exposes_its_request() {
    let op = ops::OpenSession::new(OpenSessionRequest { session_path: "/a".to_string() });
    assert_eq!(ops::OpenSession::COMMAND, CommandId::OpenSession);
    assert!(!ops::OpenSession::HAS_RESPONSE);
    assert_eq!(op.request().unwrap().session_path, "/a");
}

#[test]
fn response_op_declares_a_response_type() {
    let op = ops::GetSessionName::new();
    assert!(ops::GetSessionName::HAS_RESPONSE);
    assert!(op.request().is_none());
    assert!(op.response.is_none());
}

#[test]
fn request_response_op_declares_both() {
    let op = ops::AuthorizeConnection::new(oplink_proto::AuthorizeConnectionRequest {
        auth_string: "t".to_string(),
    });
    assert!(ops::AuthorizeConnection::HAS_RESPONSE);
    assert_eq!(op.request().unwrap().auth_string, "t");
}

#[test]
fn repair_hooks_default_to_identity() {
    let op = ops::GetSessionName::new();
    assert_eq!(op.repair_request(r#"{"x":1}"#.to_string()), r#"{"x":1}"#);
    assert_eq!(op.repair_response(r#"{"y":2}"#.to_string()), r#"{"y":2}"#);
}

#[test]
fn record_status_stores_on_the_operation() {
    let mut op = ops::SaveSession::new();
    op.record_status(CommandStatus::Completed);
    assert_eq!(op.status, Some(CommandStatus::Completed));
}

#[test]
fn delivered_body_lands_on_the_operation() {
    let mut op = ops::GetSessionName::new();
    op.on_response(oplink_proto::GetSessionNameResponse { session_name: "S".to_string() });
    assert_eq!(op.response.unwrap().session_name, "S");
}
