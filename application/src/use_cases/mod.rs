//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod build_proposals;
pub mod cast_vote;
pub mod collect_response;
