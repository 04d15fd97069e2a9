//! Proposal voting
//!
//! Each eligible participant casts one vote for one of a fixed number of
//! proposal slots. Re-voting overwrites. Once every eligible participant
//! has voted the plan reaches quorum and the tally is finalized: the slot
//! with the most votes wins, ties going to the lowest slot number.
//!
//! Votes are never retracted when a voter later changes attendance to
//! `no`; the tally counts every vote on record.

pub mod slot;
pub mod state;
pub mod tally;

pub use slot::{ProposalSlot, SLOT_COUNT};
pub use state::{VotingState, eligible_voters};
pub use tally::Tally;
