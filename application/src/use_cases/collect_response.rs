//! Collect Response use case
//!
//! Starts plans and merges participant answers (attendance, dates,
//! preferences) into the participant store.

use crate::ports::PlanStore;
use crate::ports::event_context_store::{EventContextStore, NoEventContextStore};
use crate::ports::plan_events::{NoPlanEventLogger, PlanEvent, PlanEventLogger};
use crate::session_locks::SessionLocks;
use kanji_domain::{
    Attendance, BudgetRange, ChannelId, DomainError, EventContext, ParticipantId,
    ParticipantResponse, Plan, PlanId, PlanStatus, ResponseUpdate,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

/// Input for starting a plan in a thread
#[derive(Debug, Clone)]
pub struct StartPlanInput {
    pub plan: PlanId,
    pub channel: ChannelId,
    pub title: Option<String>,
    pub organizer: Option<ParticipantId>,
}

impl StartPlanInput {
    pub fn new(plan: impl Into<PlanId>, channel: impl Into<ChannelId>) -> Self {
        Self {
            plan: plan.into(),
            channel: channel.into(),
            title: None,
            organizer: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_organizer(mut self, organizer: impl Into<ParticipantId>) -> Self {
        self.organizer = Some(organizer.into());
        self
    }
}

/// Result of starting a plan
#[derive(Debug, Clone, Serialize)]
pub struct StartPlanOutput {
    /// The plan as stored (the existing one if the thread already had a plan)
    pub plan: Plan,
    /// Whether this call created it
    pub created: bool,
}

/// Raw values from the preference form
///
/// Every field is optional free text. Blank text counts as not supplied,
/// and a budget that is not `min-max` is ignored.
#[derive(Debug, Clone, Default)]
pub struct PreferenceForm {
    pub area: Option<String>,
    pub budget: Option<String>,
    pub cuisine: Option<String>,
}

impl PreferenceForm {
    /// Convert the form into a partial update
    pub fn into_update(self) -> ResponseUpdate {
        let mut update = ResponseUpdate::new();
        if let Some(area) = non_blank(self.area) {
            update = update.area(area);
        }
        if let Some(budget) = self.budget.as_deref().and_then(BudgetRange::parse) {
            update = update.budget(budget);
        }
        if let Some(cuisine) = non_blank(self.cuisine) {
            update = update.cuisine(cuisine);
        }
        update
    }
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

/// Use case for starting plans and collecting participant responses
pub struct CollectResponseUseCase<S: PlanStore + 'static> {
    store: Arc<S>,
    locks: Arc<SessionLocks>,
    contexts: Arc<dyn EventContextStore>,
    events: Arc<dyn PlanEventLogger>,
}

impl<S: PlanStore + 'static> CollectResponseUseCase<S> {
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

    /// Create the plan for a thread; a thread that already has one keeps it
    pub fn start_plan(&self, input: StartPlanInput) -> Result<StartPlanOutput, DomainError> {
        let mut plan = Plan::new(input.plan.clone(), input.channel.clone());
        if let Some(title) = &input.title {
            plan = plan.with_title(title.clone());
        }

        self.locks.with_plan(&input.plan, || {
            let created = self.store.create_plan(plan);
            let plan = self.store.get_plan(&input.plan)?;

            if created {
                info!("Started plan {} in channel {}", plan.id, plan.channel);
                let mut context = EventContext::new(plan.id.clone(), plan.channel.clone());
                if let Some(organizer) = input.organizer {
                    context = context.with_organizer(organizer);
                }
                self.contexts.set(&plan.id, context);
                self.events.log(PlanEvent::new(
                    "plan_started",
                    json!({
                        "plan": plan.id,
                        "channel": plan.channel,
                        "title": plan.title,
                    }),
                ));
            } else {
                debug!("Plan {} already exists; keeping channel {}", plan.id, plan.channel);
            }

            Ok(StartPlanOutput { plan, created })
        })
    }

    /// Merge a partial update into the participant's response
    pub fn submit(
        &self,
        plan: &PlanId,
        participant: &ParticipantId,
        update: ResponseUpdate,
    ) -> Result<ParticipantResponse, DomainError> {
        self.locks.with_plan(plan, || {
            let current = self.store.get_plan(plan)?;
            let next_status = status_after(current.status, &update);

            let row = self.store.upsert_response(plan, participant, update)?;
            if next_status != current.status {
                self.store.update_status(plan, next_status)?;
            }

            if let Some(mut context) = self.contexts.get(plan) {
                context.add_participant(participant);
                self.contexts.set(plan, context);
            }

            debug!("Upserted response of {} in plan {}", participant, plan);
            self.events.log(PlanEvent::new(
                "response_upserted",
                json!({
                    "plan": plan,
                    "participant": participant,
                    "response": row,
                }),
            ));
            Ok(row)
        })
    }

    pub fn submit_attendance(
        &self,
        plan: &PlanId,
        participant: &ParticipantId,
        attendance: Attendance,
    ) -> Result<ParticipantResponse, DomainError> {
        self.submit(plan, participant, ResponseUpdate::new().attendance(attendance))
    }

    pub fn submit_dates(
        &self,
        plan: &PlanId,
        participant: &ParticipantId,
        dates: Vec<String>,
    ) -> Result<ParticipantResponse, DomainError> {
        self.submit(plan, participant, ResponseUpdate::new().dates(dates))
    }

    /// Apply the preference form; `Ok(None)` when the form was blank
    pub fn submit_preferences(
        &self,
        plan: &PlanId,
        participant: &ParticipantId,
        form: PreferenceForm,
    ) -> Result<Option<ParticipantResponse>, DomainError> {
        let update = form.into_update();
        if update.is_empty() {
            debug!("Blank preference form from {} in plan {}", participant, plan);
            return Ok(None);
        }
        self.submit(plan, participant, update).map(Some)
    }

    pub fn list_responses(&self, plan: &PlanId) -> Vec<ParticipantResponse> {
        self.store.list_responses(plan)
    }

    pub fn plan(&self, plan: &PlanId) -> Result<Plan, DomainError> {
        self.store.get_plan(plan)
    }

    pub fn latest_plan_for_channel(&self, channel: &ChannelId) -> Result<PlanId, DomainError> {
        self.store.latest_plan_for_channel(channel)
    }

    /// Set the status label explicitly
    pub fn update_status(&self, plan: &PlanId, status: PlanStatus) -> Result<(), DomainError> {
        self.locks.with_plan(plan, || self.store.update_status(plan, status))
    }
}

/// The status label a plan moves to when it receives `update`
fn status_after(current: PlanStatus, update: &ResponseUpdate) -> PlanStatus {
    let mut status = current;
    if update.dates.is_some() {
        status = status.advance(PlanStatus::Dates);
    }
    if update.area.is_some()
        || update.budget_min.is_some()
        || update.budget_max.is_some()
        || update.cuisine.is_some()
    {
        status = status.advance(PlanStatus::Prefs);
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MemoryContexts, MemoryStore, RecordingLogger};

    fn setup() -> (
        CollectResponseUseCase<MemoryStore>,
        Arc<MemoryContexts>,
        Arc<RecordingLogger>,
    ) {
        let contexts = Arc::new(MemoryContexts::default());
        let logger = Arc::new(RecordingLogger::default());
        let use_case =
            CollectResponseUseCase::new(Arc::new(MemoryStore::default()), Arc::new(SessionLocks::new()))
                .with_context_store(contexts.clone())
                .with_plan_event_logger(logger.clone());
        (use_case, contexts, logger)
    }

    fn plan() -> PlanId {
        PlanId::from("T1")
    }

    fn user(id: &str) -> ParticipantId {
        ParticipantId::from(id)
    }

    #[test]
    fn test_start_plan_is_idempotent() {
        let (use_case, _, logger) = setup();
        let first = use_case.start_plan(StartPlanInput::new("T1", "chanA")).unwrap();
        let second = use_case.start_plan(StartPlanInput::new("T1", "chanA")).unwrap();
        let third = use_case.start_plan(StartPlanInput::new("T1", "chanB")).unwrap();

        assert!(first.created);
        assert!(!second.created);
        assert!(!third.created);
        assert_eq!(third.plan.channel, ChannelId::from("chanA"));
        assert_eq!(logger.count("plan_started"), 1);
    }

    #[test]
    fn test_concurrent_starts_create_one_plan() {
        let (use_case, contexts, logger) = setup();
        let use_case = Arc::new(use_case);

        let handles: Vec<_> = ["chanA", "chanB", "chanC", "chanD"]
            .into_iter()
            .map(|channel| {
                let use_case = Arc::clone(&use_case);
                std::thread::spawn(move || {
                    use_case.start_plan(StartPlanInput::new("T1", channel)).unwrap()
                })
            })
            .collect();
        let outputs: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(outputs.iter().filter(|o| o.created).count(), 1);
        let channel = use_case.plan(&plan()).unwrap().channel;
        assert!(outputs.iter().all(|o| o.plan.channel == channel));
        assert_eq!(contexts.get(&plan()).unwrap().channel, channel);
        assert_eq!(logger.count("plan_started"), 1);
    }

    #[test]
    fn test_start_plan_seeds_context() {
        let (use_case, contexts, _) = setup();
        use_case
            .start_plan(StartPlanInput::new("T1", "C1").with_title("暑気払い").with_organizer("U0"))
            .unwrap();

        let context = contexts.get(&plan()).unwrap();
        assert_eq!(context.organizer, Some(user("U0")));
        assert_eq!(use_case.plan(&plan()).unwrap().title.as_deref(), Some("暑気払い"));
    }

    #[test]
    fn test_submit_requires_existing_plan() {
        let (use_case, _, _) = setup();
        let result = use_case.submit_attendance(&plan(), &user("U1"), Attendance::Yes);
        assert!(matches!(result, Err(DomainError::NotFound(_))));
        assert!(use_case.list_responses(&plan()).is_empty());
    }

    #[test]
    fn test_answers_merge_in_any_order() {
        let (use_case, contexts, logger) = setup();
        use_case.start_plan(StartPlanInput::new("T1", "C1")).unwrap();

        use_case
            .submit_preferences(
                &plan(),
                &user("U1"),
                PreferenceForm {
                    area: Some(" 新宿 ".to_string()),
                    budget: Some("3000-5000".to_string()),
                    cuisine: Some("焼き鳥, 居酒屋".to_string()),
                },
            )
            .unwrap();
        use_case
            .submit_dates(&plan(), &user("U1"), vec!["2024-07-01".to_string()])
            .unwrap();
        let row = use_case
            .submit_attendance(&plan(), &user("U1"), Attendance::Maybe)
            .unwrap();

        assert_eq!(row.attendance, Some(Attendance::Maybe));
        assert_eq!(row.dates, vec!["2024-07-01"]);
        assert_eq!(row.area.as_deref(), Some("新宿"));
        assert_eq!(row.budget(), Some(BudgetRange::new(3000, 5000)));
        assert_eq!(row.cuisine.as_deref(), Some("焼き鳥, 居酒屋"));
        assert_eq!(logger.count("response_upserted"), 3);
        assert_eq!(contexts.get(&plan()).unwrap().participants, vec![user("U1")]);
    }

    #[test]
    fn test_blank_preference_form_is_ignored() {
        let (use_case, _, _) = setup();
        use_case.start_plan(StartPlanInput::new("T1", "C1")).unwrap();

        let result = use_case
            .submit_preferences(
                &plan(),
                &user("U1"),
                PreferenceForm {
                    area: Some("  ".to_string()),
                    budget: Some("cheap".to_string()),
                    cuisine: None,
                },
            )
            .unwrap();

        assert!(result.is_none());
        assert!(use_case.list_responses(&plan()).is_empty());
    }

    #[test]
    fn test_status_label_advances_with_answers() {
        let (use_case, _, _) = setup();
        use_case.start_plan(StartPlanInput::new("T1", "C1")).unwrap();
        assert_eq!(use_case.plan(&plan()).unwrap().status, PlanStatus::Attendance);

        use_case
            .submit_dates(&plan(), &user("U1"), vec!["2024-07-01".to_string()])
            .unwrap();
        assert_eq!(use_case.plan(&plan()).unwrap().status, PlanStatus::Dates);

        use_case
            .submit(&plan(), &user("U2"), ResponseUpdate::new().area("上野"))
            .unwrap();
        assert_eq!(use_case.plan(&plan()).unwrap().status, PlanStatus::Prefs);

        // a late date answer does not move the label back
        use_case
            .submit_dates(&plan(), &user("U3"), vec!["2024-07-02".to_string()])
            .unwrap();
        assert_eq!(use_case.plan(&plan()).unwrap().status, PlanStatus::Prefs);
    }

    #[test]
    fn test_latest_plan_for_channel() {
        let (use_case, _, _) = setup();
        use_case.start_plan(StartPlanInput::new("T1", "C1")).unwrap();
        use_case.start_plan(StartPlanInput::new("T2", "C2")).unwrap();
        use_case.start_plan(StartPlanInput::new("T3", "C1")).unwrap();

        assert_eq!(
            use_case.latest_plan_for_channel(&ChannelId::from("C1")).unwrap(),
            PlanId::from("T3")
        );
        assert!(
            use_case
                .latest_plan_for_channel(&ChannelId::from("C9"))
                .unwrap_err()
                .is_not_found()
        );
    }

    #[test]
    fn test_preference_form_budget_parsing() {
        let update = PreferenceForm {
            budget: Some("2000-4000".to_string()),
            ..Default::default()
        }
        .into_update();
        assert_eq!(update.budget_min, Some(2000));
        assert_eq!(update.budget_max, Some(4000));

        let update = PreferenceForm {
            budget: Some("4000".to_string()),
            ..Default::default()
        }
        .into_update();
        assert!(update.is_empty());
    }
}
