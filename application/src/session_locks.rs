//! Per-plan mutual exclusion
//!
//! Use cases that read, decide and write (record a vote, then tally, then
//! maybe finalize) run under the lock of the plan they touch. Different
//! plans never contend.

use kanji_domain::PlanId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// A lock per [`PlanId`], created on first use
#[derive(Debug, Default)]
pub struct SessionLocks {
    locks: Mutex<HashMap<PlanId, Arc<Mutex<()>>>>,
}

impl SessionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_for(&self, plan: &PlanId) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry(plan.clone()).or_default())
    }

    /// Run `f` while holding the plan's lock
    pub fn with_plan<R>(&self, plan: &PlanId, f: impl FnOnce() -> R) -> R {
        let lock = self.lock_for(plan);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        f()
    }
}
