//! Port for structured plan event logging.
//!
//! Defines the [`PlanEventLogger`] trait for recording what happened to a
//! plan (started, responses, proposals, votes, finalization) to a structured
//! log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures an audit
//! trail in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured plan event for logging.
pub struct PlanEvent {
    /// Event type identifier (e.g., "plan_started", "vote_recorded").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl PlanEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging plan events to a structured log.
///
/// The `log` method is synchronous and non-fallible; logging failures never
/// reach the caller.
pub trait PlanEventLogger: Send + Sync {
    fn log(&self, event: PlanEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoPlanEventLogger;

impl PlanEventLogger for NoPlanEventLogger {
    fn log(&self, _event: PlanEvent) {}
}
