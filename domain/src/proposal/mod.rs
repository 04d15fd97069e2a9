//! Proposals offered for voting
//!
//! A proposal is a read-only projection of the consensus summary for one
//! candidate date, plus venue candidates supplied by an external search
//! collaborator. Venue data is opaque to the domain.

pub mod entities;

pub use entities::{Proposal, VenueCandidate, VenueQuery};
