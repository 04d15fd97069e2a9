//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every variant is a local, recoverable condition. Callers decide how to
/// present them to participants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No votes recorded for plan {0}")]
    NoVotesRecorded(String),
}

impl DomainError {
    /// Shorthand for an unknown plan
    pub fn plan_not_found(plan: impl std::fmt::Display) -> Self {
        DomainError::NotFound(format!("plan {}", plan))
    }

    /// Check if this error represents a missing key
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_not_found_display() {
        let error = DomainError::plan_not_found("1700000000.000100");
        assert_eq!(error.to_string(), "Not found: plan 1700000000.000100");
    }

    #[test]
    fn test_is_not_found_check() {
        assert!(DomainError::NotFound("x".to_string()).is_not_found());
        assert!(!DomainError::InvalidInput("x".to_string()).is_not_found());
        assert!(!DomainError::NoVotesRecorded("x".to_string()).is_not_found());
    }
}
