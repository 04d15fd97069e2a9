//! Planning parameters for proposal building.

use kanji_domain::{BudgetRange, SLOT_COUNT};
use serde::{Deserialize, Serialize};

/// Parameters for turning a consensus summary into proposals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// How many top dates become proposals (capped at the slot count).
    pub top_dates: usize,
    /// Maximum venue candidates requested per proposal.
    pub venues_per_proposal: usize,
    /// Budget used when nobody eligible gave both bounds.
    pub default_budget: BudgetRange,
    /// Spacing of the synthetic dates offered when nobody proposed one.
    pub fallback_interval_days: u64,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            top_dates: usize::from(SLOT_COUNT),
            venues_per_proposal: 5,
            default_budget: BudgetRange::DEFAULT,
            fallback_interval_days: 7,
        }
    }
}

impl PlanningConfig {
    // ==================== Builder Methods ====================

    pub fn with_top_dates(mut self, top_dates: usize) -> Self {
        self.top_dates = top_dates;
        self
    }

    pub fn with_venues_per_proposal(mut self, venues: usize) -> Self {
        self.venues_per_proposal = venues;
        self
    }

    pub fn with_default_budget(mut self, budget: BudgetRange) -> Self {
        self.default_budget = budget;
        self
    }

    pub fn with_fallback_interval_days(mut self, days: u64) -> Self {
        self.fallback_interval_days = days;
        self
    }

    /// Number of proposals actually offered
    pub fn proposal_count(&self) -> usize {
        self.top_dates.min(usize::from(SLOT_COUNT))
    }
}
