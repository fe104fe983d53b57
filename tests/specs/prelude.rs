// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for end-to-end specs.

use std::io::Write;
use std::net::TcpListener;
use std::thread::JoinHandle;

use oplink_proto::{
    decode, encode, read_message, write_message, AuthorizeConnectionResponse, CommandId,
    RequestEnvelope, ResponseEnvelope,
};

/// A scripted host: accepts one connection, answers each incoming
/// request with the next scripted response, then hangs up.
pub struct MockHost {
    address: String,
    handle: JoinHandle<Vec<RequestEnvelope>>,
}

impl MockHost {
    pub fn serve(responses: Vec<ResponseEnvelope>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock host");
        let address = listener.local_addr().expect("local addr").to_string();
        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let mut seen = Vec::new();
            for response in responses {
                let frame = match read_message(&mut stream) {
                    Ok(frame) => frame,
                    // Client hung up early; return what we saw
                    Err(_) => return seen,
                };
                let request: RequestEnvelope = decode(&frame).expect("decode request");
                seen.push(request);
                let payload = encode(&response).expect("encode response");
                write_message(&mut stream, &payload).expect("write response");
            }
            seen
        });
        Self { address, handle }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Join the host thread and return every request it captured.
    pub fn finish(self) -> Vec<RequestEnvelope> {
        self.handle.join().expect("mock host thread")
    }
}

pub fn ready_response() -> ResponseEnvelope {
    ResponseEnvelope::completed(CommandId::HostReadyCheck, "")
}

pub fn authorized_response(session_id: &str) -> ResponseEnvelope {
    let body = AuthorizeConnectionResponse {
        is_authorized: true,
        session_id: session_id.to_string(),
        message: String::new(),
    };
    ResponseEnvelope::completed(
        CommandId::AuthorizeConnection,
        serde_json::to_string(&body).expect("marshal"),
    )
}

pub fn denied_response(message: &str) -> ResponseEnvelope {
    let body = AuthorizeConnectionResponse {
        is_authorized: false,
        session_id: String::new(),
        message: message.to_string(),
    };
    ResponseEnvelope::completed(
        CommandId::AuthorizeConnection,
        serde_json::to_string(&body).expect("marshal"),
    )
}

/// Write `token` to a temp file and return the handle keeping it alive.
pub fn token_file(token: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(token.as_bytes()).expect("write token");
    file.flush().expect("flush token");
    file
}
