// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use oplink_proto::CommandId;

use super::*;
use crate::test_support::SharedSink;

fn auditor(enabled: bool) -> (Auditor, SharedSink) {
    let sink = SharedSink::default();
    (Auditor::with_sink(enabled, Box::new(sink.clone())), sink)
}

#[test]
fn disabled_auditor_never_touches_the_sink() {
    let (mut auditor, sink) = auditor(false);
    auditor.command_started(CommandId::GetSessionName);
    auditor.request_json("{}");
    auditor.response_was_empty();
    auditor.command_finished();
    assert_eq!(sink.contents(), "");
}

#[test]
fn disabled_auditor_still_advances_the_sequence() {
    let (mut auditor, _sink) = auditor(false);
    assert_eq!(auditor.sequence(), 1);
    auditor.command_finished();
    assert_eq!(auditor.sequence(), 2);
}

#[test]
fn lines_carry_the_command_sequence_number() {
    let (mut auditor, sink) = auditor(true);
    auditor.command_started(CommandId::GetSessionName);
    auditor.command_finished();
    auditor.command_started(CommandId::SaveSession);

    let contents = sink.contents();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("0001"));
    assert!(lines[0].contains("Started Command GetSessionName (15)"));
    assert!(lines[1].starts_with("0001"));
    assert!(lines[1].contains("Finished Command"));
    // Sequence advanced after the finish line
    assert!(lines[2].starts_with("0002"));
    assert!(lines[2].contains("Started Command SaveSession (13)"));
}

#[test]
fn request_and_response_events_quote_the_json() {
    let (mut auditor, sink) = auditor(true);
    auditor.request_json(r#"{"a":1}"#);
    auditor.request_json_repaired(r#"{"a":2}"#);
    auditor.response_json(r#"{"b":1}"#);
    auditor.response_json_repaired(r#"{"b":2}"#);

    let contents = sink.contents();
    assert!(contents.contains(r#"Created JSON for request body: {"a":1}"#));
    assert!(contents.contains(r#"Re-formatted JSON for request body: {"a":2}"#));
    assert!(contents.contains(r#"Received JSON response body: {"b":1}"#));
    assert!(contents.contains(r#"Re-formatted JSON response body: {"b":2}"#));
}
