// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Synchronous transport to the host scripting service.

use std::net::TcpStream;

use oplink_proto::{decode, encode, read_message, write_message, RequestEnvelope, ResponseEnvelope};
use tracing::debug;

use crate::error::TransportError;

/// One established connection to the host.
///
/// `send` is the sole blocking call in the protocol layer: one request
/// out, one response back, no timeout and no retry. There is no
/// channel-level security; trust is established by the application
/// handshake above this layer.
pub trait Transport {
    fn send(&mut self, request: &RequestEnvelope) -> Result<ResponseEnvelope, TransportError>;
}

/// TCP transport speaking the length-prefixed JSON wire format.
pub struct TcpTransport {
    stream: TcpStream,
}

impl TcpTransport {
    /// Connect to `address` (`host:port`).
    pub fn connect(address: &str) -> Result<Self, TransportError> {
        let stream = TcpStream::connect(address).map_err(|source| TransportError::Unavailable {
            address: address.to_string(),
            source,
        })?;
        // One small frame per command; don't let Nagle hold them back.
        let _ = stream.set_nodelay(true);
        debug!(address, "connected");
        Ok(Self { stream })
    }
}

impl Transport for TcpTransport {
    fn send(&mut self, request: &RequestEnvelope) -> Result<ResponseEnvelope, TransportError> {
        let payload = encode(request)?;
        write_message(&mut self.stream, &payload)?;
        let frame = read_message(&mut self.stream)?;
        Ok(decode(&frame)?)
    }
}
