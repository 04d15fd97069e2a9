//! Vote tally and winner selection

use super::slot::ProposalSlot;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Vote counts for every proposal slot
///
/// Always holds an entry for each legal slot, zero when nobody voted for it.
///
/// # Example
///
/// ```
/// use kanji_domain::voting::{ProposalSlot, Tally};
///
/// let slot = |n| ProposalSlot::new(n).unwrap();
/// let tally = Tally::from_votes([slot(2), slot(1), slot(2), slot(1)]);
/// // 1 and 2 tie on two votes; the lower slot wins
/// assert_eq!(tally.winner(), Some(slot(1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    counts: BTreeMap<ProposalSlot, usize>,
}

impl Tally {
    pub fn from_votes<I: IntoIterator<Item = ProposalSlot>>(votes: I) -> Self {
        let mut counts: BTreeMap<ProposalSlot, usize> =
            ProposalSlot::all().map(|slot| (slot, 0)).collect();
        for slot in votes {
            *counts.entry(slot).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn count(&self, slot: ProposalSlot) -> usize {
        self.counts.get(&slot).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// `(slot, count)` pairs in ascending slot order
    pub fn iter(&self) -> impl Iterator<Item = (ProposalSlot, usize)> + '_ {
        self.counts.iter().map(|(slot, count)| (*slot, *count))
    }

    /// Slot with the most votes, lowest slot on ties; `None` without votes
    pub fn winner(&self) -> Option<ProposalSlot> {
        if self.total() == 0 {
            return None;
        }
        let mut best: Option<(ProposalSlot, usize)> = None;
        // ascending order plus strict comparison keeps the lowest slot on ties
        for (slot, count) in self.iter() {
            if best.is_none_or(|(_, top)| count > top) {
                best = Some((slot, count));
            }
        }
        best.map(|(slot, _)| slot)
    }

    /// Pick the winner, or report that nothing has been voted on
    pub fn finalize(&self, plan: impl std::fmt::Display) -> Result<ProposalSlot, DomainError> {
        self.winner()
            .ok_or_else(|| DomainError::NoVotesRecorded(plan.to_string()))
    }
}
