//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.
//! The store ports are synchronous: every operation completes in memory.
//! Collaborator ports (venue search, alignment text) are async.

pub mod alignment_advisor;
pub mod event_context_store;
pub mod participant_repository;
pub mod plan_events;
pub mod plan_repository;
pub mod venue_search;
pub mod vote_repository;

use participant_repository::ParticipantRepository;
use plan_repository::PlanRepository;
use vote_repository::VoteRepository;

/// Everything a planning use case needs from storage
///
/// Implemented automatically for any type providing all three repositories.
pub trait PlanStore: PlanRepository + ParticipantRepository + VoteRepository {}

impl<T> PlanStore for T where T: PlanRepository + ParticipantRepository + VoteRepository {}
