//! Per-thread scratch context
//!
//! Working data about a plan that is worth keeping around while the thread
//! is active but is not part of the durable plan record. It is held in the
//! TTL+LRU cache ([`crate::cache::TtlLruCache`]) and may disappear at any time.

pub mod event_context;

pub use event_context::{EventContext, ParticipantPref};
