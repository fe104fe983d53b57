// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client-side protocol adapter for the studio host scripting service.
//!
//! The [`Client`] owns one authenticated session over one connection and
//! executes [`Operation`]s synchronously: marshal the typed request,
//! apply per-command JSON repairs, dispatch, classify the response
//! status, and deliver the parsed body or raise a structured error.
//! [`Engine`] layers per-feature convenience methods on top.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod audit;
mod client;
mod config;
mod engine;
pub mod env;
mod error;
mod operation;
pub mod ops;
mod transport;

// Re-exported for operation and engine signatures
pub use oplink_proto as proto;

pub use audit::Auditor;
pub use client::Client;
pub use config::{ClientConfig, Credential};
pub use engine::Engine;
pub use error::{ClientError, TransportError};
pub use operation::{NoBody, NoRequest, Operation};
pub use transport::{TcpTransport, Transport};

#[cfg(test)]
mod test_support;
