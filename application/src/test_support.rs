//! In-memory fakes shared by use case tests

use crate::ports::event_context_store::EventContextStore;
use crate::ports::participant_repository::ParticipantRepository;
use crate::ports::plan_events::{PlanEvent, PlanEventLogger};
use crate::ports::plan_repository::PlanRepository;
use crate::ports::vote_repository::VoteRepository;
use kanji_domain::{
    ChannelId, DomainError, EventContext, ParticipantId, ParticipantResponse, Plan, PlanId,
    PlanStatus, ProposalSlot, ResponseUpdate,
};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
struct State {
    plans: Vec<Plan>,
    responses: Vec<(PlanId, ParticipantResponse)>,
    votes: Vec<(PlanId, ParticipantId, ProposalSlot)>,
}

/// Minimal store keeping everything in insertion-ordered vectors
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl PlanRepository for MemoryStore {
    fn create_plan(&self, plan: Plan) -> bool {
        let mut state = self.state.lock().unwrap();
        if state.plans.iter().any(|p| p.id == plan.id) {
            return false;
        }
        state.plans.push(plan);
        true
    }

    fn get_plan(&self, id: &PlanId) -> Result<Plan, DomainError> {
        let state = self.state.lock().unwrap();
        state
            .plans
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| DomainError::plan_not_found(id))
    }

    fn latest_plan_for_channel(&self, channel: &ChannelId) -> Result<PlanId, DomainError> {
        let state = self.state.lock().unwrap();
        state
            .plans
            .iter()
            .rev()
            .find(|p| &p.channel == channel)
            .map(|p| p.id.clone())
            .ok_or_else(|| DomainError::NotFound(format!("plan in channel {}", channel)))
    }

    fn update_status(&self, id: &PlanId, status: PlanStatus) -> Result<(), DomainError> {
        let mut state = self.state.lock().unwrap();
        let plan = state
            .plans
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| DomainError::plan_not_found(id))?;
        plan.status = status;
        Ok(())
    }

    fn record_decision(&self, id: &PlanId, slot: ProposalSlot) -> Result<(), DomainError> {
        let mut state = self.state.lock().unwrap();
        let plan = state
            .plans
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| DomainError::plan_not_found(id))?;
        plan.decision = Some(slot);
        Ok(())
    }
}

impl ParticipantRepository for MemoryStore {
    fn upsert_response(
        &self,
        plan: &PlanId,
        participant: &ParticipantId,
        update: ResponseUpdate,
    ) -> Result<ParticipantResponse, DomainError> {
        let mut state = self.state.lock().unwrap();
        let existing = state
            .responses
            .iter()
            .position(|(p, r)| p == plan && &r.participant == participant);
        match existing {
            Some(i) => {
                let row = &mut state.responses[i].1;
                row.apply(update)?;
                Ok(row.clone())
            }
            None => {
                let mut row = ParticipantResponse::new(participant.clone());
                row.apply(update)?;
                state.responses.push((plan.clone(), row.clone()));
                Ok(row)
            }
        }
    }

    fn list_responses(&self, plan: &PlanId) -> Vec<ParticipantResponse> {
        let state = self.state.lock().unwrap();
        state
            .responses
            .iter()
            .filter(|(p, _)| p == plan)
            .map(|(_, r)| r.clone())
            .collect()
    }
}

impl VoteRepository for MemoryStore {
    fn record_vote(&self, plan: &PlanId, participant: &ParticipantId, slot: ProposalSlot) {
        let mut state = self.state.lock().unwrap();
        match state
            .votes
            .iter()
            .position(|(p, who, _)| p == plan && who == participant)
        {
            Some(i) => state.votes[i].2 = slot,
            None => state.votes.push((plan.clone(), participant.clone(), slot)),
        }
    }

    fn votes(&self, plan: &PlanId) -> Vec<(ParticipantId, ProposalSlot)> {
        let state = self.state.lock().unwrap();
        state
            .votes
            .iter()
            .filter(|(p, _, _)| p == plan)
            .map(|(_, who, slot)| (who.clone(), *slot))
            .collect()
    }
}

/// Unbounded, never-expiring context store
#[derive(Default)]
pub struct MemoryContexts {
    contexts: Mutex<HashMap<PlanId, EventContext>>,
}

impl EventContextStore for MemoryContexts {
    fn get(&self, plan: &PlanId) -> Option<EventContext> {
        self.contexts.lock().unwrap().get(plan).cloned()
    }

    fn set(&self, plan: &PlanId, context: EventContext) {
        self.contexts.lock().unwrap().insert(plan.clone(), context);
    }

    fn evict(&self, plan: &PlanId) {
        self.contexts.lock().unwrap().remove(plan);
    }
}

/// Logger that keeps event types for assertions
#[derive(Default)]
pub struct RecordingLogger {
    events: Mutex<Vec<(&'static str, serde_json::Value)>>,
}

impl RecordingLogger {
    pub fn count(&self, event_type: &str) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(t, _)| *t == event_type)
            .count()
    }

    pub fn last(&self, event_type: &str) -> Option<serde_json::Value> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(t, _)| *t == event_type)
            .map(|(_, payload)| payload.clone())
    }
}

impl PlanEventLogger for RecordingLogger {
    fn log(&self, event: PlanEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type, event.payload));
    }
}
