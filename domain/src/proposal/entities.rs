//! Proposal and venue types

use crate::consensus::ConsensusSummary;
use crate::participant::BudgetRange;
use crate::voting::ProposalSlot;
use serde::{Deserialize, Serialize};

/// A venue suggested by the search collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueCandidate {
    pub name: String,
    pub url: String,
    pub budget_label: Option<String>,
}

impl VenueCandidate {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            budget_label: None,
        }
    }

    pub fn with_budget_label(mut self, label: impl Into<String>) -> Self {
        self.budget_label = Some(label.into());
        self
    }
}

/// What the venue search collaborator is asked for one proposal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueQuery {
    pub date: String,
    pub area: Option<String>,
    pub budget: BudgetRange,
    pub cuisine: Vec<String>,
    /// Maximum number of candidates wanted
    pub size: usize,
}

impl VenueQuery {
    pub fn for_date(summary: &ConsensusSummary, date: impl Into<String>, size: usize) -> Self {
        Self {
            date: date.into(),
            area: summary.area.clone(),
            budget: summary.budget,
            cuisine: summary.cuisine.clone(),
            size,
        }
    }

    /// Cuisines joined the way keyword searches expect them
    pub fn cuisine_keyword(&self) -> Option<String> {
        (!self.cuisine.is_empty()).then(|| self.cuisine.join(", "))
    }
}

/// One candidate plan offered for voting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub slot: ProposalSlot,
    pub date: String,
    pub area: Option<String>,
    pub budget: BudgetRange,
    pub cuisine: Vec<String>,
    pub venues: Vec<VenueCandidate>,
}

impl Proposal {
    pub fn from_query(slot: ProposalSlot, query: VenueQuery, venues: Vec<VenueCandidate>) -> Self {
        Self {
            slot,
            date: query.date,
            area: query.area,
            budget: query.budget,
            cuisine: query.cuisine,
            venues,
        }
    }
}
