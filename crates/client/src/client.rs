// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client orchestration: one authenticated session over one connection.

use oplink_proto::{
    AuthorizeConnectionRequest, CommandError, CommandStatus, ErrorCode, RegisterConnectionRequest,
    RequestEnvelope, ResponseEnvelope,
};
use tracing::{debug, error, info, warn};

use crate::audit::Auditor;
use crate::config::{ClientConfig, Credential};
use crate::error::ClientError;
use crate::operation::Operation;
use crate::ops::{AuthorizeConnection, HostReadyCheck, RegisterConnection};
use crate::transport::{TcpTransport, Transport};

/// Client for one scripting session on the host.
///
/// Strictly single-threaded and synchronous: one in-flight command per
/// session, no background tasks, no internal scheduler. Parallelism
/// requires independent clients over independent connections. The
/// connection is a scoped resource: it is released on [`Client::close`]
/// and when the client is dropped, including on early failure during
/// construction.
pub struct Client {
    transport: Option<Box<dyn Transport>>,
    session_id: String,
    auditor: Auditor,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("connected", &self.transport.is_some())
            .field("session_id", &self.session_id)
            .finish()
    }
}

impl Client {
    /// Connect to the host, probe readiness, and authenticate.
    ///
    /// A failed readiness probe or any transport failure aborts
    /// construction; no half-open client is ever returned. A *denied*
    /// authentication does not abort: the message is surfaced and the
    /// client stays usable for unauthenticated probes.
    pub fn connect(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = TcpTransport::connect(&config.address)?;
        Self::with_transport(Box::new(transport), config)
    }

    /// Like [`Client::connect`] over a caller-supplied transport.
    pub fn with_transport(
        transport: Box<dyn Transport>,
        config: ClientConfig,
    ) -> Result<Self, ClientError> {
        let auditor = Auditor::new(config.auditing);
        Self::handshake(transport, auditor, &config.credential)
    }

    /// Like [`Client::with_transport`] with an explicit auditor, for
    /// callers that direct the audit trail somewhere other than stderr.
    pub fn with_transport_and_auditor(
        transport: Box<dyn Transport>,
        auditor: Auditor,
        config: ClientConfig,
    ) -> Result<Self, ClientError> {
        Self::handshake(transport, auditor, &config.credential)
    }

    fn handshake(
        transport: Box<dyn Transport>,
        auditor: Auditor,
        credential: &Credential,
    ) -> Result<Self, ClientError> {
        let mut client = Self {
            transport: Some(transport),
            session_id: String::new(),
            auditor,
        };
        if let Err(e) = client.check_host_ready() {
            client.close();
            return Err(e);
        }
        if let Err(e) = client.authenticate(credential) {
            client.close();
            return Err(e);
        }
        Ok(client)
    }

    /// Execute `operation` synchronously.
    ///
    /// On success the result lives on the operation. On command failure
    /// the status is still recorded on the operation and
    /// [`ClientError::CommandFailed`] carries the normalized error.
    pub fn run<O: Operation>(&mut self, operation: &mut O) -> Result<(), ClientError> {
        if self.transport.is_none() {
            return Err(ClientError::Closed);
        }

        self.auditor.command_started(O::COMMAND);
        let body = self.marshal_request(operation)?;
        let envelope = RequestEnvelope::new(O::COMMAND, self.session_id.clone(), body);
        let response = self.dispatch(&envelope)?;

        let status = response.status();
        operation.record_status(status);
        match status {
            CommandStatus::Failed => {
                let command_error = normalize_command_error(&response.response_error_json)?;
                warn!(
                    command = %O::COMMAND,
                    code = command_error.command_error_type,
                    "command failed"
                );
                return Err(ClientError::CommandFailed(command_error));
            }
            CommandStatus::Completed => self.deliver(operation, &response)?,
            CommandStatus::Other(code) => {
                error!(command = %O::COMMAND, status = code, "unexpected response status");
                return Err(ClientError::ProtocolViolation { status: code });
            }
        }

        self.auditor.command_finished();
        Ok(())
    }

    /// Session token, empty until authentication succeeds.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Whether the handshake produced a session.
    pub fn is_authenticated(&self) -> bool {
        !self.session_id.is_empty()
    }

    /// Sequence number the next command will be audited under.
    pub fn command_sequence(&self) -> u64 {
        self.auditor.sequence()
    }

    /// Close the client: clear the session, release the connection.
    /// Idempotent; later `run` calls fail fast with
    /// [`ClientError::Closed`].
    pub fn close(&mut self) {
        self.transport = None;
        self.session_id.clear();
    }

    fn marshal_request<O: Operation>(&mut self, operation: &O) -> Result<String, ClientError> {
        // Default-valued fields stay present and field names are kept
        // verbatim: the host is schema-strict about field presence.
        let raw = match operation.request() {
            Some(request) => serde_json::to_string(request)
                .map_err(|source| ClientError::BadPayload { context: "request", source })?,
            None => String::new(),
        };
        self.auditor.request_json(&raw);
        let repaired = operation.repair_request(raw);
        self.auditor.request_json_repaired(&repaired);
        Ok(repaired)
    }

    fn dispatch(&mut self, envelope: &RequestEnvelope) -> Result<ResponseEnvelope, ClientError> {
        let transport = self.transport.as_mut().ok_or(ClientError::Closed)?;
        // Sole blocking call; no timeout, no retry at this layer.
        Ok(transport.send(envelope)?)
    }

    fn deliver<O: Operation>(
        &mut self,
        operation: &mut O,
        response: &ResponseEnvelope,
    ) -> Result<(), ClientError> {
        if O::HAS_RESPONSE && !response.response_body_json.is_empty() {
            self.auditor.response_json(&response.response_body_json);
            let repaired = operation.repair_response(response.response_body_json.clone());
            self.auditor.response_json_repaired(&repaired);
            // Unknown fields are tolerated; the host may be newer.
            let body = serde_json::from_str(&repaired)
                .map_err(|source| ClientError::BadPayload { context: "response", source })?;
            operation.on_response(body);
        } else {
            operation.on_empty_response();
            self.auditor.response_was_empty();
        }
        Ok(())
    }

    /// Liveness probe, sent with no session attached. `Failed` means
    /// "remote not ready" and is reported as such, not as a command
    /// error.
    fn check_host_ready(&mut self) -> Result<(), ClientError> {
        let mut probe = HostReadyCheck::new();
        match self.run(&mut probe) {
            Ok(()) => {
                debug!("host ready");
                Ok(())
            }
            Err(ClientError::CommandFailed(command_error)) => {
                warn!(detail = %command_error.message, "host not ready");
                Err(ClientError::RemoteNotReady { message: command_error.message })
            }
            Err(other) => Err(other),
        }
    }

    fn authenticate(&mut self, credential: &Credential) -> Result<(), ClientError> {
        match credential {
            Credential::ApiToken { path } => {
                let token = std::fs::read_to_string(path)?;
                let mut op = AuthorizeConnection::new(AuthorizeConnectionRequest {
                    auth_string: token.trim().to_string(),
                });
                match self.run(&mut op) {
                    Ok(()) => {
                        let response = op.response.unwrap_or_default();
                        self.adopt_session(
                            "authorization",
                            response.is_authorized,
                            response.session_id,
                            &response.message,
                        );
                        Ok(())
                    }
                    Err(e) => Self::absorb_denial("authorization", e),
                }
            }
            Credential::Registration { company_name, application_name } => {
                let mut op = RegisterConnection::new(RegisterConnectionRequest {
                    company_name: company_name.clone(),
                    application_name: application_name.clone(),
                });
                match self.run(&mut op) {
                    Ok(()) => {
                        let response = op.response.unwrap_or_default();
                        self.adopt_session(
                            "registration",
                            response.is_authorized,
                            response.session_id,
                            &response.message,
                        );
                        Ok(())
                    }
                    Err(e) => Self::absorb_denial("registration", e),
                }
            }
        }
    }

    fn adopt_session(
        &mut self,
        handshake: &'static str,
        is_authorized: bool,
        session_id: String,
        message: &str,
    ) {
        if is_authorized {
            info!(handshake, "session established");
            self.session_id = session_id;
        } else {
            warn!(handshake, detail = message, "connection was not authorized");
        }
    }

    /// A handshake the host explicitly failed leaves the session
    /// unauthenticated; later commands get rejected by the remote end,
    /// not by this layer. Anything else still aborts construction.
    fn absorb_denial(handshake: &'static str, error: ClientError) -> Result<(), ClientError> {
        match error {
            ClientError::CommandFailed(command_error) => {
                warn!(handshake, detail = %command_error.message, "handshake failed");
                Ok(())
            }
            other => Err(other),
        }
    }
}

/// Normalize `command_error_type` to its integer encoding, then parse
/// the payload structurally.
///
/// The host emits the code as a bare integer, a numeric string, or a
/// symbolic name depending on its code path; everything funnels to the
/// integer, with unrecognized text degrading to
/// [`ErrorCode::UnknownError`].
fn normalize_command_error(error_json: &str) -> Result<CommandError, ClientError> {
    let mut value: serde_json::Value = serde_json::from_str(error_json)
        .map_err(|source| ClientError::BadPayload { context: "error", source })?;
    if let Some(object) = value.as_object_mut() {
        let normalized = match object.get("command_error_type") {
            Some(serde_json::Value::String(text)) => Some(normalize_error_type(text)),
            _ => None,
        };
        if let Some(code) = normalized {
            object.insert("command_error_type".to_string(), code.into());
        }
    }
    serde_json::from_value(value)
        .map_err(|source| ClientError::BadPayload { context: "error", source })
}

fn normalize_error_type(text: &str) -> i32 {
    if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
        text.parse().unwrap_or(ErrorCode::UnknownError.code())
    } else if let Some(known) = ErrorCode::from_name(text) {
        known.code()
    } else {
        ErrorCode::UnknownError.code()
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
