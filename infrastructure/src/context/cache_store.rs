//! Event context store backed by the domain TTL+LRU cache

use kanji_application::ports::event_context_store::EventContextStore;
use kanji_domain::{Clock, EventContext, PlanId, SystemClock, TtlLruCache};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::trace;

/// Bounded, expiring per-thread context
///
/// Reads refresh both recency and the TTL of the entry they hit.
pub struct InMemoryEventContextStore<C: Clock = SystemClock> {
    cache: Mutex<TtlLruCache<PlanId, EventContext, C>>,
}

impl InMemoryEventContextStore<SystemClock> {
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self::with_clock(max_entries, ttl, SystemClock)
    }
}

impl<C: Clock> InMemoryEventContextStore<C> {
    pub fn with_clock(max_entries: usize, ttl: Duration, clock: C) -> Self {
        Self {
            cache: Mutex::new(TtlLruCache::with_clock(max_entries, ttl, clock)),
        }
    }

    pub fn len(&self) -> usize {
        self.cache().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache().is_empty()
    }

    fn cache(&self) -> MutexGuard<'_, TtlLruCache<PlanId, EventContext, C>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: Clock> EventContextStore for InMemoryEventContextStore<C> {
    fn get(&self, plan: &PlanId) -> Option<EventContext> {
        let context = self.cache().get(plan).cloned();
        if context.is_none() {
            trace!("No cached context for plan {}", plan);
        }
        context
    }

    fn set(&self, plan: &PlanId, context: EventContext) {
        self.cache().set(plan.clone(), context);
    }

    fn evict(&self, plan: &PlanId) {
        self.cache().evict(plan);
    }
}
