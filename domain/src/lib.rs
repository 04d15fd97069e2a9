//! Domain layer for kanji
//!
//! This crate contains the core planning logic: sessions, participant
//! responses, preference aggregation, proposals and voting. It has no
//! dependencies on infrastructure or presentation concerns and performs
//! no I/O.
//!
//! # Core Concepts
//!
//! ## Plan
//!
//! One planning session per chat thread. Participants answer attendance,
//! date candidates and preferences in any order; each answer is merged
//! into their [`ParticipantResponse`].
//!
//! ## Consensus
//!
//! [`summarize`] turns the responses of `yes`/`maybe` participants into a
//! [`ConsensusSummary`]: ranked dates, area, median budget, top cuisines.
//!
//! ## Voting
//!
//! Proposals are voted on by slot. When every eligible participant has
//! voted the [`Tally`] is finalized; ties go to the lowest slot.

pub mod cache;
pub mod consensus;
pub mod context;
pub mod core;
pub mod participant;
pub mod plan;
pub mod proposal;
pub mod voting;

// Re-export commonly used types
pub use cache::{Clock, ManualClock, SystemClock, TtlLruCache};
pub use consensus::{ConsensusSummary, DateCount, summarize, summarize_with_budget};
pub use context::{EventContext, ParticipantPref};
pub use crate::core::{
    error::DomainError,
    id::{ChannelId, ParticipantId, PlanId},
};
pub use participant::{Attendance, BudgetRange, DatesInput, ParticipantResponse, ResponseUpdate};
pub use plan::{Plan, PlanStatus};
pub use proposal::{Proposal, VenueCandidate, VenueQuery};
pub use voting::{ProposalSlot, SLOT_COUNT, Tally, VotingState, eligible_voters};
