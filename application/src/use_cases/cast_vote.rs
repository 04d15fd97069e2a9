//! Voting use case
//!
//! Records votes, reports the tally and finalizes the plan. Each vote runs
//! under the plan's lock, so quorum detection and the automatic
//! finalization it triggers happen exactly once.

use crate::ports::PlanStore;
use crate::ports::event_context_store::{EventContextStore, NoEventContextStore};
use crate::ports::plan_events::{NoPlanEventLogger, PlanEvent, PlanEventLogger};
use crate::session_locks::SessionLocks;
use kanji_domain::{
    DomainError, ParticipantId, Plan, PlanId, PlanStatus, Proposal, ProposalSlot, Tally,
    VotingState, eligible_voters,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

/// A recorded winner
#[derive(Debug, Clone, Serialize)]
pub struct Finalization {
    pub plan: PlanId,
    pub winner: ProposalSlot,
    pub tally: Tally,
    /// The winning proposal, while the thread context is still cached
    pub proposal: Option<Proposal>,
    /// Whether quorum triggered it rather than an explicit request
    pub automatic: bool,
}

/// What happened after one vote
#[derive(Debug, Clone, Serialize)]
pub struct VoteOutcome {
    pub plan: PlanId,
    pub participant: ParticipantId,
    pub slot: ProposalSlot,
    pub tally: Tally,
    pub state: VotingState,
    pub eligible: Vec<ParticipantId>,
    pub voted: Vec<ParticipantId>,
    /// Set only by the vote that completed the quorum
    pub finalized: Option<Finalization>,
}

/// Snapshot of a plan's vote
struct Ballot {
    eligible: Vec<ParticipantId>,
    voted: Vec<ParticipantId>,
    tally: Tally,
}

impl Ballot {
    fn state(&self) -> VotingState {
        VotingState::evaluate(&self.eligible, &self.voted)
    }
}

/// Use case for voting on proposals and finalizing the winner
pub struct VotingUseCase<S: PlanStore + 'static> {
    store: Arc<S>,
    locks: Arc<SessionLocks>,
    contexts: Arc<dyn EventContextStore>,
    events: Arc<dyn PlanEventLogger>,
}

impl<S: PlanStore + 'static> VotingUseCase<S> {
    pub fn new(store: Arc<S>, locks: Arc<SessionLocks>) -> Self {
        Self {
            store,
            locks,
            contexts: Arc::new(NoEventContextStore),
            events: Arc::new(NoPlanEventLogger),
        }
    }

    pub fn with_context_store(mut self, contexts: Arc<dyn EventContextStore>) -> Self {
        self.contexts = contexts;
        self
    }

    pub fn with_plan_event_logger(mut self, events: Arc<dyn PlanEventLogger>) -> Self {
        self.events = events;
        self
    }

    /// Record `participant`'s vote and finalize if it completes the quorum
    pub fn cast_vote(
        &self,
        plan: &PlanId,
        participant: &ParticipantId,
        slot: u8,
    ) -> Result<VoteOutcome, DomainError> {
        self.locks.with_plan(plan, || {
            let current = self.store.get_plan(plan)?;
            let slot = ProposalSlot::new(slot)?;

            self.store.record_vote(plan, participant, slot);
            let ballot = self.ballot(plan);
            let state = ballot.state();
            debug!(
                "{} voted {} in plan {} ({}/{} eligible voted)",
                participant,
                slot,
                plan,
                ballot.voted.len(),
                ballot.eligible.len()
            );
            self.events.log(PlanEvent::new(
                "vote_recorded",
                json!({
                    "plan": plan,
                    "participant": participant,
                    "slot": slot,
                    "state": state,
                }),
            ));

            let finalized = if state.is_quorum() && !current.is_decided() {
                Some(self.record_winner(&current, &ballot.tally, true)?)
            } else {
                None
            };

            Ok(VoteOutcome {
                plan: plan.clone(),
                participant: participant.clone(),
                slot,
                tally: ballot.tally,
                state,
                eligible: ballot.eligible,
                voted: ballot.voted,
                finalized,
            })
        })
    }

    /// Pick the winner from the current tally and record it
    ///
    /// Can be called at any time and repeatedly; each call recomputes the
    /// winner from the votes on record.
    pub fn finalize(&self, plan: &PlanId) -> Result<Finalization, DomainError> {
        self.locks.with_plan(plan, || {
            let current = self.store.get_plan(plan)?;
            let ballot = self.ballot(plan);
            self.record_winner(&current, &ballot.tally, false)
        })
    }

    pub fn eligible_voters(&self, plan: &PlanId) -> Result<Vec<ParticipantId>, DomainError> {
        self.store.get_plan(plan)?;
        Ok(eligible_voters(&self.store.list_responses(plan)))
    }

    pub fn voters_who_voted(&self, plan: &PlanId) -> Result<Vec<ParticipantId>, DomainError> {
        self.store.get_plan(plan)?;
        Ok(self.store.votes(plan).into_iter().map(|(who, _)| who).collect())
    }

    pub fn tally(&self, plan: &PlanId) -> Result<Tally, DomainError> {
        self.store.get_plan(plan)?;
        Ok(self.ballot(plan).tally)
    }

    pub fn state(&self, plan: &PlanId) -> Result<VotingState, DomainError> {
        self.store.get_plan(plan)?;
        Ok(self.ballot(plan).state())
    }

    fn ballot(&self, plan: &PlanId) -> Ballot {
        let votes = self.store.votes(plan);
        Ballot {
            eligible: eligible_voters(&self.store.list_responses(plan)),
            tally: Tally::from_votes(votes.iter().map(|(_, slot)| *slot)),
            voted: votes.into_iter().map(|(who, _)| who).collect(),
        }
    }

    fn record_winner(
        &self,
        plan: &Plan,
        tally: &Tally,
        automatic: bool,
    ) -> Result<Finalization, DomainError> {
        let winner = tally.finalize(&plan.id)?;
        self.store.record_decision(&plan.id, winner)?;
        self.store
            .update_status(&plan.id, plan.status.advance(PlanStatus::Done))?;

        let proposal = self
            .contexts
            .get(&plan.id)
            .and_then(|context| context.proposal(winner).cloned());

        info!(
            "Plan {} finalized on proposal {} ({} votes)",
            plan.id,
            winner,
            tally.count(winner)
        );
        self.events.log(PlanEvent::new(
            "plan_finalized",
            json!({
                "plan": plan.id,
                "winner": winner,
                "tally": tally,
                "automatic": automatic,
            }),
        ));

        Ok(Finalization {
            plan: plan.id.clone(),
            winner,
            tally: tally.clone(),
            proposal,
            automatic,
        })
    }
}
