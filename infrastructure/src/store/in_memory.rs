//! In-memory plan registry, participant store and vote store

use kanji_application::ports::participant_repository::ParticipantRepository;
use kanji_application::ports::plan_repository::PlanRepository;
use kanji_application::ports::vote_repository::VoteRepository;
use kanji_domain::{
    ChannelId, DomainError, ParticipantId, ParticipantResponse, Plan, PlanId, PlanStatus,
    ProposalSlot, ResponseUpdate,
};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::trace;

#[derive(Default)]
struct StoreState {
    plans: HashMap<PlanId, Plan>,
    latest_by_channel: HashMap<ChannelId, PlanId>,
    /// Per plan, in order of each participant's first answer
    responses: HashMap<PlanId, Vec<ParticipantResponse>>,
    /// Per plan, in order of each participant's first vote
    votes: HashMap<PlanId, Vec<(ParticipantId, ProposalSlot)>>,
}

/// Store for everything the planning use cases persist
///
/// Every operation takes the lock for its whole read-modify-write, so a
/// single call is atomic. Responses and votes are keyed by plan id only;
/// callers check that the plan exists.
#[derive(Default)]
pub struct InMemoryPlanStore {
    state: RwLock<StoreState>,
}

impl InMemoryPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plan_count(&self) -> usize {
        self.read().plans.len()
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_plan_mut<R>(
        &self,
        id: &PlanId,
        f: impl FnOnce(&mut Plan) -> R,
    ) -> Result<R, DomainError> {
        let mut state = self.write();
        let plan = state
            .plans
            .get_mut(id)
            .ok_or_else(|| DomainError::plan_not_found(id))?;
        Ok(f(plan))
    }
}

impl PlanRepository for InMemoryPlanStore {
    fn create_plan(&self, plan: Plan) -> bool {
        let mut state = self.write();
        if state.plans.contains_key(&plan.id) {
            trace!("Plan {} already registered", plan.id);
            return false;
        }
        state
            .latest_by_channel
            .insert(plan.channel.clone(), plan.id.clone());
        state.plans.insert(plan.id.clone(), plan);
        true
    }

    fn get_plan(&self, id: &PlanId) -> Result<Plan, DomainError> {
        self.read()
            .plans
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::plan_not_found(id))
    }

    fn latest_plan_for_channel(&self, channel: &ChannelId) -> Result<PlanId, DomainError> {
        self.read()
            .latest_by_channel
            .get(channel)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("plan in channel {}", channel)))
    }

    fn update_status(&self, id: &PlanId, status: PlanStatus) -> Result<(), DomainError> {
        self.with_plan_mut(id, |plan| plan.status = status)
    }

    fn record_decision(&self, id: &PlanId, slot: ProposalSlot) -> Result<(), DomainError> {
        self.with_plan_mut(id, |plan| plan.decision = Some(slot))
    }
}

impl ParticipantRepository for InMemoryPlanStore {
    fn upsert_response(
        &self,
        plan: &PlanId,
        participant: &ParticipantId,
        update: ResponseUpdate,
    ) -> Result<ParticipantResponse, DomainError> {
        let mut state = self.write();
        let rows = state.responses.entry(plan.clone()).or_default();

        if let Some(row) = rows.iter_mut().find(|r| &r.participant == participant) {
            row.apply(update)?;
            return Ok(row.clone());
        }

        let mut row = ParticipantResponse::new(participant.clone());
        row.apply(update)?;
        rows.push(row.clone());
        Ok(row)
    }

    fn list_responses(&self, plan: &PlanId) -> Vec<ParticipantResponse> {
        self.read()
            .responses
            .get(plan)
            .cloned()
            .unwrap_or_default()
    }
}

impl VoteRepository for InMemoryPlanStore {
    fn record_vote(&self, plan: &PlanId, participant: &ParticipantId, slot: ProposalSlot) {
        let mut state = self.write();
        let votes = state.votes.entry(plan.clone()).or_default();
        match votes.iter().position(|(who, _)| who == participant) {
            Some(i) => votes[i].1 = slot,
            None => votes.push((participant.clone(), slot)),
        }
    }

    fn votes(&self, plan: &PlanId) -> Vec<(ParticipantId, ProposalSlot)> {
        self.read().votes.get(plan).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanji_domain::{Attendance, BudgetRange};
    use std::sync::Arc;
    use std::thread;

    fn plan(id: &str, channel: &str) -> Plan {
        Plan::new(PlanId::from(id), ChannelId::from(channel))
    }

    fn user(id: &str) -> ParticipantId {
        ParticipantId::from(id)
    }

    fn slot(n: u8) -> ProposalSlot {
        ProposalSlot::new(n).unwrap()
    }

    #[test]
    fn test_create_is_first_writer_wins() {
        let store = InMemoryPlanStore::new();
        assert!(store.create_plan(plan("T1", "chanA")));
        assert!(!store.create_plan(plan("T1", "chanB")));

        assert_eq!(
            store.channel_of(&PlanId::from("T1")).unwrap(),
            ChannelId::from("chanA")
        );
        assert!(
            store
                .latest_plan_for_channel(&ChannelId::from("chanB"))
                .unwrap_err()
                .is_not_found()
        );
    }

    #[test]
    fn test_latest_plan_per_channel() {
        let store = InMemoryPlanStore::new();
        store.create_plan(plan("T1", "C1"));
        store.create_plan(plan("T2", "C1"));
        store.create_plan(plan("T3", "C2"));
        // re-creating T1 does not make it the latest again
        store.create_plan(plan("T1", "C1"));

        assert_eq!(
            store.latest_plan_for_channel(&ChannelId::from("C1")).unwrap(),
            PlanId::from("T2")
        );
        assert_eq!(
            store.latest_plan_for_channel(&ChannelId::from("C2")).unwrap(),
            PlanId::from("T3")
        );
    }

    #[test]
    fn test_unknown_plan() {
        let store = InMemoryPlanStore::new();
        let id = PlanId::from("missing");
        assert!(store.get_plan(&id).unwrap_err().is_not_found());
        assert!(store.update_status(&id, PlanStatus::Done).is_err());
        assert!(store.record_decision(&id, slot(1)).is_err());
        assert!(store.list_responses(&id).is_empty());
        assert!(store.votes(&id).is_empty());
    }

    #[test]
    fn test_status_and_decision() {
        let store = InMemoryPlanStore::new();
        store.create_plan(plan("T1", "C1"));
        let id = PlanId::from("T1");

        store.update_status(&id, PlanStatus::Confirm).unwrap();
        store.record_decision(&id, slot(2)).unwrap();

        let stored = store.get_plan(&id).unwrap();
        assert_eq!(stored.status, PlanStatus::Confirm);
        assert_eq!(stored.decision, Some(slot(2)));
    }

    #[test]
    fn test_responses_keep_first_answer_order() {
        let store = InMemoryPlanStore::new();
        let id = PlanId::from("T1");
        for who in ["U2", "U1", "U2", "U3"] {
            store
                .upsert_response(&id, &user(who), ResponseUpdate::new().attendance(Attendance::Yes))
                .unwrap();
        }

        let order: Vec<String> = store
            .list_responses(&id)
            .iter()
            .map(|r| r.participant.to_string())
            .collect();
        assert_eq!(order, vec!["U2", "U1", "U3"]);
    }

    #[test]
    fn test_upsert_merges() {
        let store = InMemoryPlanStore::new();
        let id = PlanId::from("T1");
        store
            .upsert_response(&id, &user("U1"), ResponseUpdate::new().area("新宿"))
            .unwrap();
        let row = store
            .upsert_response(
                &id,
                &user("U1"),
                ResponseUpdate::new().budget(BudgetRange::new(3000, 5000)),
            )
            .unwrap();

        assert_eq!(row.area.as_deref(), Some("新宿"));
        assert_eq!(row.budget(), Some(BudgetRange::new(3000, 5000)));
        assert_eq!(store.list_responses(&id), vec![row]);
    }

    #[test]
    fn test_revote_overwrites_in_place() {
        let store = InMemoryPlanStore::new();
        let id = PlanId::from("T1");
        store.record_vote(&id, &user("U1"), slot(1));
        store.record_vote(&id, &user("U2"), slot(2));
        store.record_vote(&id, &user("U1"), slot(3));

        assert_eq!(
            store.votes(&id),
            vec![(user("U1"), slot(3)), (user("U2"), slot(2))]
        );
    }

    #[test]
    fn test_concurrent_upserts_lose_nothing() {
        let store = Arc::new(InMemoryPlanStore::new());
        let id = PlanId::from("T1");

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = Arc::clone(&store);
                let id = id.clone();
                thread::spawn(move || {
                    let who = user(&format!("U{}", i % 4));
                    let update = if (i / 4) % 2 == 0 {
                        ResponseUpdate::new().attendance(Attendance::Yes)
                    } else {
                        ResponseUpdate::new().area("新宿")
                    };
                    store.upsert_response(&id, &who, update).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let rows = store.list_responses(&id);
        assert_eq!(rows.len(), 4);
        for row in rows {
            assert_eq!(row.attendance, Some(Attendance::Yes));
            assert_eq!(row.area.as_deref(), Some("新宿"));
        }
    }
}
