//! Build Proposals use case
//!
//! Summarizes a plan's responses, turns the top dates into numbered
//! proposals and asks the venue search collaborator for candidates.

use crate::config::PlanningConfig;
use crate::ports::PlanStore;
use crate::ports::alignment_advisor::{AlignmentAdvisor, NoAlignment};
use crate::ports::event_context_store::{EventContextStore, NoEventContextStore};
use crate::ports::plan_events::{NoPlanEventLogger, PlanEvent, PlanEventLogger};
use crate::ports::venue_search::{NoVenueSearch, VenueSearch};
use crate::session_locks::SessionLocks;
use chrono::{Days, NaiveDate};
use kanji_domain::{
    ConsensusSummary, DomainError, EventContext, PlanId, PlanStatus, Proposal, ProposalSlot,
    VenueQuery, summarize_with_budget,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors from building proposals
#[derive(Error, Debug)]
pub enum BuildProposalsError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("No responses collected for plan {0} yet")]
    NoResponses(PlanId),
}

/// The proposals offered for a plan
#[derive(Debug, Clone, Serialize)]
pub struct ProposalSet {
    pub plan: PlanId,
    pub summary: ConsensusSummary,
    pub proposals: Vec<Proposal>,
    /// Free-text guidance from the alignment advisor, shown as-is
    pub alignment: Option<String>,
    /// Whether the dates were synthesized because nobody proposed one
    pub fallback_dates: bool,
}

/// Use case for turning collected responses into proposals
pub struct BuildProposalsUseCase<S: PlanStore + 'static> {
    store: Arc<S>,
    locks: Arc<SessionLocks>,
    config: PlanningConfig,
    venues: Arc<dyn VenueSearch>,
    advisor: Arc<dyn AlignmentAdvisor>,
    contexts: Arc<dyn EventContextStore>,
    events: Arc<dyn PlanEventLogger>,
}

impl<S: PlanStore + 'static> BuildProposalsUseCase<S> {
    pub fn new(store: Arc<S>, locks: Arc<SessionLocks>, config: PlanningConfig) -> Self {
        Self {
            store,
            locks,
            config,
            venues: Arc::new(NoVenueSearch),
            advisor: Arc::new(NoAlignment),
            contexts: Arc::new(NoEventContextStore),
            events: Arc::new(NoPlanEventLogger),
        }
    }

    pub fn with_venue_search(mut self, venues: Arc<dyn VenueSearch>) -> Self {
        self.venues = venues;
        self
    }

    pub fn with_alignment_advisor(mut self, advisor: Arc<dyn AlignmentAdvisor>) -> Self {
        self.advisor = advisor;
        self
    }

    pub fn with_context_store(mut self, contexts: Arc<dyn EventContextStore>) -> Self {
        self.contexts = contexts;
        self
    }

    pub fn with_plan_event_logger(mut self, events: Arc<dyn PlanEventLogger>) -> Self {
        self.events = events;
        self
    }

    /// Build proposals for `plan`, anchoring fallback dates at `today`
    ///
    /// Collaborators are queried without holding the plan's lock; the plan
    /// and its context are re-read under the lock before writing back.
    pub async fn execute(
        &self,
        plan: &PlanId,
        today: NaiveDate,
    ) -> Result<ProposalSet, BuildProposalsError> {
        self.store.get_plan(plan)?;
        let responses = self.store.list_responses(plan);
        if responses.is_empty() {
            return Err(BuildProposalsError::NoResponses(plan.clone()));
        }

        let summary = summarize_with_budget(&responses, self.config.default_budget);
        let count = self.config.proposal_count();

        let mut dates = summary.top_dates(count);
        let fallback_dates = dates.is_empty();
        if fallback_dates {
            dates = self.fallback_dates(today, count);
            debug!("No proposed dates for plan {}; using {:?}", plan, dates);
        }

        let mut proposals = Vec::with_capacity(dates.len());
        for (slot, date) in ProposalSlot::all().zip(dates) {
            let query = VenueQuery::for_date(&summary, date, self.config.venues_per_proposal);
            let venues = match self.venues.search(&query).await {
                Ok(venues) => venues,
                Err(e) => {
                    warn!("Venue search failed for {} on {}: {}", plan, query.date, e);
                    Vec::new()
                }
            };
            proposals.push(Proposal::from_query(slot, query, venues));
        }

        let alignment = match self.advisor.advise(&summary).await {
            Ok(text) => Some(text),
            Err(e) => {
                warn!("No alignment message for {}: {}", plan, e);
                None
            }
        };

        self.locks.with_plan(plan, || {
            let current = self.store.get_plan(plan)?;
            let mut context = self
                .contexts
                .get(plan)
                .unwrap_or_else(|| EventContext::new(plan.clone(), current.channel.clone()));
            context.set_proposals(proposals.clone());
            self.contexts.set(plan, context);

            self.store
                .update_status(plan, current.status.advance(PlanStatus::Confirm))
        })?;

        info!(
            "Built {} proposals for plan {} from {} eligible responses",
            proposals.len(),
            plan,
            summary.eligible
        );
        self.events.log(PlanEvent::new(
            "proposals_built",
            json!({
                "plan": plan,
                "summary": summary,
                "proposals": proposals,
                "fallback_dates": fallback_dates,
            }),
        ));

        Ok(ProposalSet {
            plan: plan.clone(),
            summary,
            proposals,
            alignment,
            fallback_dates,
        })
    }

    /// `today`, then every `fallback_interval_days` after it
    fn fallback_dates(&self, today: NaiveDate, count: usize) -> Vec<String> {
        (0..count as u64)
            .filter_map(|i| {
                let offset = i.checked_mul(self.config.fallback_interval_days)?;
                today.checked_add_days(Days::new(offset))
            })
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect()
    }
}
