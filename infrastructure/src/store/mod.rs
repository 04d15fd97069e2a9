//! Plan, response and vote storage
//!
//! - [`InMemoryPlanStore`] - Process-lifetime store implementing all three
//!   repository ports behind one lock

mod in_memory;

pub use in_memory::InMemoryPlanStore;
