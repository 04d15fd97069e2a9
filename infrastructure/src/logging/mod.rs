//! Logging infrastructure: the structured plan event log.
//!
//! Provides [`JsonlPlanEventLogger`], a JSONL file writer that implements
//! the [`PlanEventLogger`](kanji_application::PlanEventLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlPlanEventLogger;
