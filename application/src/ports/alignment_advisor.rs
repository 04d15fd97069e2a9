//! Alignment guidance port
//!
//! An external text-generation service can turn a consensus summary into a
//! short message nudging the group towards agreement. The text is opaque:
//! it is displayed, never parsed.

use async_trait::async_trait;
use kanji_domain::ConsensusSummary;
use thiserror::Error;

/// Errors reported by an alignment adapter
#[derive(Error, Debug)]
pub enum AlignmentError {
    #[error("Alignment generation failed: {0}")]
    Generation(String),
}

/// Produces free-text alignment guidance for a summary
#[async_trait]
pub trait AlignmentAdvisor: Send + Sync {
    async fn advise(&self, summary: &ConsensusSummary) -> Result<String, AlignmentError>;
}

/// Adapter used when no text generation is configured
pub struct NoAlignment;

#[async_trait]
impl AlignmentAdvisor for NoAlignment {
    async fn advise(&self, _summary: &ConsensusSummary) -> Result<String, AlignmentError> {
        Err(AlignmentError::Generation("no advisor configured".to_string()))
    }
}
