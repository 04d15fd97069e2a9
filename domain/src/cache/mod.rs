//! Bounded ephemeral cache
//!
//! A generic TTL + LRU cache for per-thread scratch data. Expired entries
//! are swept lazily at the start of every `get`/`set`; there is no
//! background timer.

pub mod clock;
pub mod ttl_lru;

pub use clock::{Clock, ManualClock, SystemClock};
pub use ttl_lru::TtlLruCache;
