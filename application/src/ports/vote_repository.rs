//! Vote store port

use kanji_domain::{ParticipantId, PlanId, ProposalSlot};

/// One vote per participant per plan
pub trait VoteRepository: Send + Sync {
    /// Record a vote, replacing the participant's previous one
    fn record_vote(&self, plan: &PlanId, participant: &ParticipantId, slot: ProposalSlot);

    /// Every vote on record for the plan, in order of each voter's first vote
    fn votes(&self, plan: &PlanId) -> Vec<(ParticipantId, ProposalSlot)>;
}
