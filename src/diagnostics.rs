//! Render diagnostics.
//!
//! Every page render emits exactly one [`DiagnosticEvent`] before its content
//! tree is built. Events go to a [`DiagnosticSink`] passed in by the caller,
//! so there is no process-wide logger: the CLI hands renderers a
//! [`StdoutSink`] (or [`StderrSink`] when stdout carries JSON), tests hand
//! them a [`CaptureSink`] or a closure.
//!
//! Emission is fire-and-forget. A sink cannot report failure and the event is
//! not kept once the sink returns.

use crate::output;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticEvent {
    pub source_id: String,
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub timestamp: String,
    pub message: String,
}

impl DiagnosticEvent {
    /// Build an event stamped with the current wall-clock time.
    pub fn now(source_id: &str, message: &str) -> Self {
        Self {
            source_id: source_id.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            message: message.to_string(),
        }
    }
}

/// Destination for diagnostic events.
///
/// Sinks are `Sync` so one sink can serve independent renders.
pub trait DiagnosticSink: Sync {
    fn record(&self, event: &DiagnosticEvent);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&DiagnosticEvent) + Sync,
{
    fn record(&self, event: &DiagnosticEvent) {
        self(event)
    }
}

/// Writes one `<source_id> <timestamp> <message>` line per event to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn record(&self, event: &DiagnosticEvent) {
        output::print_diagnostic(event);
    }
}

/// Same line format as [`StdoutSink`], written to stderr. Used when stdout
/// carries machine-readable output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn record(&self, event: &DiagnosticEvent) {
        output::eprint_diagnostic(event);
    }
}

/// Collects events in memory.
#[derive(Debug, Default)]
pub struct CaptureSink {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far.
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<DiagnosticEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for CaptureSink {
    fn record(&self, event: &DiagnosticEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}

/// Stamp and emit a single event.
pub fn emit(sink: &dyn DiagnosticSink, source_id: &str, message: &str) {
    sink.record(&DiagnosticEvent::now(source_id, message));
}
