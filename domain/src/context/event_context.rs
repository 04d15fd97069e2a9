//! Event context for one planning thread

use crate::core::id::{ChannelId, ParticipantId, PlanId};
use crate::proposal::Proposal;
use crate::voting::ProposalSlot;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Dietary and budget notes collected from one participant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantPref {
    pub spicy_ok: Option<bool>,
    pub seafood_ok: Option<bool>,
    pub allergies: Vec<String>,
    pub budget_upper: Option<i64>,
    pub notes: String,
}

/// Scratch context for a single planning session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventContext {
    pub channel: ChannelId,
    pub thread: PlanId,
    pub organizer: Option<ParticipantId>,
    pub date_candidates: Vec<String>,
    pub start_time_range: Option<String>,
    pub area_text: Option<String>,
    pub genre_candidates: Vec<String>,
    pub must_haves: BTreeMap<String, bool>,
    pub budget_min: Option<i64>,
    pub budget_max: Option<i64>,
    pub participants: Vec<ParticipantId>,
    pub prefs_by_user: HashMap<ParticipantId, ParticipantPref>,
    /// Proposals most recently offered in the thread
    pub proposals: Vec<Proposal>,
}

impl EventContext {
    pub fn new(thread: PlanId, channel: ChannelId) -> Self {
        Self {
            channel,
            thread,
            organizer: None,
            date_candidates: Vec::new(),
            start_time_range: None,
            area_text: None,
            genre_candidates: Vec::new(),
            must_haves: BTreeMap::new(),
            budget_min: None,
            budget_max: None,
            participants: Vec::new(),
            prefs_by_user: HashMap::new(),
            proposals: Vec::new(),
        }
    }

    pub fn with_organizer(mut self, organizer: ParticipantId) -> Self {
        self.organizer = Some(organizer);
        self
    }

    /// Record a participant once, keeping first-seen order
    pub fn add_participant(&mut self, participant: &ParticipantId) {
        if !self.participants.contains(participant) {
            self.participants.push(participant.clone());
        }
    }

    /// Replace the offered proposals and the candidates derived from them
    pub fn set_proposals(&mut self, proposals: Vec<Proposal>) {
        self.date_candidates = proposals.iter().map(|p| p.date.clone()).collect();
        if let Some(first) = proposals.first() {
            self.area_text = first.area.clone();
            self.genre_candidates = first.cuisine.clone();
            self.budget_min = Some(first.budget.min);
            self.budget_max = Some(first.budget.max);
        }
        self.proposals = proposals;
    }

    pub fn proposal(&self, slot: ProposalSlot) -> Option<&Proposal> {
        self.proposals.iter().find(|p| p.slot == slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::participant::BudgetRange;

    fn proposal(slot: u8, date: &str) -> Proposal {
        Proposal {
            slot: ProposalSlot::new(slot).unwrap(),
            date: date.to_string(),
            area: Some("新宿".to_string()),
            budget: BudgetRange::new(2500, 4500),
            cuisine: vec!["居酒屋".to_string()],
            venues: Vec::new(),
        }
    }

    #[test]
    fn test_add_participant_is_idempotent() {
        let mut ctx = EventContext::new(PlanId::from("T"), ChannelId::from("C"));
        ctx.add_participant(&ParticipantId::from("U1"));
        ctx.add_participant(&ParticipantId::from("U2"));
        ctx.add_participant(&ParticipantId::from("U1"));
        assert_eq!(ctx.participants.len(), 2);
    }

    #[test]
    fn test_set_proposals_derives_candidates() {
        let mut ctx = EventContext::new(PlanId::from("T"), ChannelId::from("C"));
        ctx.set_proposals(vec![proposal(1, "2024-07-01"), proposal(2, "2024-07-08")]);

        assert_eq!(ctx.date_candidates, vec!["2024-07-01", "2024-07-08"]);
        assert_eq!(ctx.area_text.as_deref(), Some("新宿"));
        assert_eq!(ctx.genre_candidates, vec!["居酒屋"]);
        assert_eq!(ctx.budget_min, Some(2500));
        assert_eq!(
            ctx.proposal(ProposalSlot::new(2).unwrap()).map(|p| p.date.as_str()),
            Some("2024-07-08")
        );
        assert!(ctx.proposal(ProposalSlot::new(3).unwrap()).is_none());
    }
}
