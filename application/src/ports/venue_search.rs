//! Venue search port
//!
//! Venue candidates come from an external search service. The planning
//! core only passes the query through and carries the results along.

use async_trait::async_trait;
use kanji_domain::{VenueCandidate, VenueQuery};
use thiserror::Error;

/// Errors reported by a venue search adapter
#[derive(Error, Debug)]
pub enum VenueSearchError {
    #[error("Venue search unavailable: {0}")]
    Unavailable(String),

    #[error("Venue search failed: {0}")]
    Failed(String),
}

/// Finds venues matching a proposal
#[async_trait]
pub trait VenueSearch: Send + Sync {
    async fn search(&self, query: &VenueQuery) -> Result<Vec<VenueCandidate>, VenueSearchError>;
}

/// Adapter that never finds anything
pub struct NoVenueSearch;

#[async_trait]
impl VenueSearch for NoVenueSearch {
    async fn search(&self, _query: &VenueQuery) -> Result<Vec<VenueCandidate>, VenueSearchError> {
        Ok(Vec::new())
    }
}
