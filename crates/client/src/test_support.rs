// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test doubles for client and engine tests.

use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex};

use oplink_proto::{
    AuthorizeConnectionResponse, CommandError, CommandId, ErrorCode, RequestEnvelope,
    ResponseEnvelope,
};

use crate::error::TransportError;
use crate::transport::Transport;

/// Handle onto the requests a [`MockTransport`] has captured.
#[derive(Clone, Default)]
pub struct RequestLog(Arc<Mutex<Vec<RequestEnvelope>>>);

impl RequestLog {
    pub fn all(&self) -> Vec<RequestEnvelope> {
        self.0.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    fn push(&self, request: RequestEnvelope) {
        self.0.lock().unwrap().push(request);
    }
}

/// Transport double replaying scripted responses in order.
pub struct MockTransport {
    responses: VecDeque<ResponseEnvelope>,
    log: RequestLog,
}

impl MockTransport {
    pub fn new(responses: Vec<ResponseEnvelope>) -> (Self, RequestLog) {
        let log = RequestLog::default();
        (Self { responses: responses.into(), log: log.clone() }, log)
    }
}

impl Transport for MockTransport {
    fn send(&mut self, request: &RequestEnvelope) -> Result<ResponseEnvelope, TransportError> {
        self.log.push(request.clone());
        self.responses
            .pop_front()
            .ok_or(TransportError::Protocol(oplink_proto::ProtocolError::ConnectionClosed))
    }
}

/// In-memory audit sink shared with the auditor under test.
#[derive(Clone, Default)]
pub struct SharedSink(Arc<Mutex<Vec<u8>>>);

impl SharedSink {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// `Completed` readiness probe response.
pub fn ready_response() -> ResponseEnvelope {
    ResponseEnvelope::completed(CommandId::HostReadyCheck, "")
}

/// `Completed` token-handshake response granting `session_id`.
pub fn authorized_response(session_id: &str) -> ResponseEnvelope {
    let body = AuthorizeConnectionResponse {
        is_authorized: true,
        session_id: session_id.to_string(),
        message: String::new(),
    };
    ResponseEnvelope::completed(
        CommandId::AuthorizeConnection,
        serde_json::to_string(&body).unwrap(),
    )
}

/// `Completed` token-handshake response denying authorization.
pub fn denied_response(message: &str) -> ResponseEnvelope {
    let body = AuthorizeConnectionResponse {
        is_authorized: false,
        session_id: String::new(),
        message: message.to_string(),
    };
    ResponseEnvelope::completed(
        CommandId::AuthorizeConnection,
        serde_json::to_string(&body).unwrap(),
    )
}

/// `Failed` response with a normalized integer error code.
pub fn failed_response(command: CommandId, code: ErrorCode, message: &str) -> ResponseEnvelope {
    ResponseEnvelope::failed(
        command,
        serde_json::to_string(&CommandError::new(code, message)).unwrap(),
    )
}

/// Write `token` to a temp file and return the handle keeping it alive.
pub fn token_file(token: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(token.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
