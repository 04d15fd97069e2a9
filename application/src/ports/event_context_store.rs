//! Ephemeral per-thread context port

use kanji_domain::{EventContext, PlanId};

/// Bounded, expiring storage for [`EventContext`]
///
/// A miss is a normal answer: the context may have expired or been evicted
/// to make room. Nothing here ever fails.
pub trait EventContextStore: Send + Sync {
    fn get(&self, plan: &PlanId) -> Option<EventContext>;

    fn set(&self, plan: &PlanId, context: EventContext);

    fn evict(&self, plan: &PlanId);
}

/// Store that remembers nothing
pub struct NoEventContextStore;

impl EventContextStore for NoEventContextStore {
    fn get(&self, _plan: &PlanId) -> Option<EventContext> {
        None
    }

    fn set(&self, _plan: &PlanId, _context: EventContext) {}

    fn evict(&self, _plan: &PlanId) {}
}
