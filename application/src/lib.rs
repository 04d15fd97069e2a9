//! Application layer for kanji
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod session_locks;
pub mod use_cases;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::PlanningConfig;
pub use ports::{
    PlanStore,
    alignment_advisor::{AlignmentAdvisor, AlignmentError, NoAlignment},
    event_context_store::{EventContextStore, NoEventContextStore},
    participant_repository::ParticipantRepository,
    plan_events::{NoPlanEventLogger, PlanEvent, PlanEventLogger},
    plan_repository::PlanRepository,
    venue_search::{NoVenueSearch, VenueSearch, VenueSearchError},
    vote_repository::VoteRepository,
};
pub use session_locks::SessionLocks;
pub use use_cases::build_proposals::{BuildProposalsError, BuildProposalsUseCase, ProposalSet};
pub use use_cases::cast_vote::{Finalization, VoteOutcome, VotingUseCase};
pub use use_cases::collect_response::{
    CollectResponseUseCase, PreferenceForm, StartPlanInput, StartPlanOutput,
};
