//! Voting state machine and quorum detection

use crate::core::id::ParticipantId;
use crate::participant::ParticipantResponse;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Where a plan's vote currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VotingState {
    /// Nobody has voted yet
    NoVotes,
    /// Votes are in, but some eligible participant has not voted
    Voting,
    /// Every eligible participant has voted (and there is at least one)
    QuorumReached,
}

impl VotingState {
    /// Derive the state from the current eligible set and the set of voters
    ///
    /// An empty eligible set never reaches quorum, so a plan cannot finalize
    /// itself before anyone has opted in.
    pub fn evaluate(eligible: &[ParticipantId], voted: &[ParticipantId]) -> Self {
        if voted.is_empty() {
            return VotingState::NoVotes;
        }
        let voted: HashSet<&ParticipantId> = voted.iter().collect();
        if !eligible.is_empty() && eligible.iter().all(|p| voted.contains(p)) {
            VotingState::QuorumReached
        } else {
            VotingState::Voting
        }
    }

    pub fn is_quorum(&self) -> bool {
        matches!(self, VotingState::QuorumReached)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VotingState::NoVotes => "no_votes",
            VotingState::Voting => "voting",
            VotingState::QuorumReached => "quorum_reached",
        }
    }
}

impl std::fmt::Display for VotingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Participants whose attendance is currently `yes` or `maybe`
pub fn eligible_voters(responses: &[ParticipantResponse]) -> Vec<ParticipantId> {
    responses
        .iter()
        .filter(|r| r.is_eligible())
        .map(|r| r.participant.clone())
        .collect()
}
