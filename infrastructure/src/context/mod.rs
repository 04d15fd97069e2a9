//! Per-thread event context storage
//!
//! - [`InMemoryEventContextStore`] - TTL+LRU bounded cache implementing the
//!   [`EventContextStore`](kanji_application::EventContextStore) port

mod cache_store;

pub use cache_store::InMemoryEventContextStore;
