// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered audit trail for one client's command lifecycle.
//!
//! One line per lifecycle event, prefixed with the command sequence
//! number and a timestamp. Distinct from `tracing` diagnostics: the
//! trail is ordered per-session evidence of exactly what went over the
//! wire.

use std::io::Write;

use chrono::Local;
use oplink_proto::CommandId;

/// Sequence-numbered line sink. Disabled by default; when disabled the
/// sink is never touched but the sequence counter still advances.
pub struct Auditor {
    enabled: bool,
    sequence: u64,
    sink: Box<dyn Write + Send>,
}

impl Auditor {
    /// Auditor writing to stderr.
    pub fn new(enabled: bool) -> Self {
        Self::with_sink(enabled, Box::new(std::io::stderr()))
    }

    /// Auditor writing to an arbitrary sink.
    pub fn with_sink(enabled: bool, sink: Box<dyn Write + Send>) -> Self {
        Self { enabled, sequence: 1, sink }
    }

    /// Sequence number of the next command to run.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    fn emit(&mut self, message: &str) {
        if !self.enabled {
            return;
        }
        let stamp = Local::now().format("[%Y-%m-%d %H:%M:%S]");
        // A failed audit write must not fail the command being audited.
        let _ = writeln!(self.sink, "{:04}{} {}", self.sequence, stamp, message);
    }

    pub(crate) fn command_started(&mut self, command: CommandId) {
        self.emit(&format!("Started Command {} ({})", command.name(), command.code()));
    }

    pub(crate) fn request_json(&mut self, json: &str) {
        self.emit(&format!("Created JSON for request body: {json}"));
    }

    pub(crate) fn request_json_repaired(&mut self, json: &str) {
        self.emit(&format!("Re-formatted JSON for request body: {json}"));
    }

    pub(crate) fn response_json(&mut self, json: &str) {
        self.emit(&format!("Received JSON response body: {json}"));
    }

    pub(crate) fn response_json_repaired(&mut self, json: &str) {
        self.emit(&format!("Re-formatted JSON response body: {json}"));
    }

    pub(crate) fn response_was_empty(&mut self) {
        self.emit("Received empty response body");
    }

    pub(crate) fn command_finished(&mut self) {
        self.emit("Finished Command");
        self.sequence += 1;
    }
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
