//! Attendance answer

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A participant's answer to "are you coming?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attendance {
    Yes,
    No,
    Maybe,
}

impl Attendance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Attendance::Yes => "yes",
            Attendance::No => "no",
            Attendance::Maybe => "maybe",
        }
    }

    /// `yes` and `maybe` count towards aggregation and voting
    pub fn is_eligible(&self) -> bool {
        matches!(self, Attendance::Yes | Attendance::Maybe)
    }
}

impl std::fmt::Display for Attendance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Attendance {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" => Ok(Attendance::Yes),
            "no" => Ok(Attendance::No),
            "maybe" => Ok(Attendance::Maybe),
            other => Err(DomainError::InvalidInput(format!(
                "attendance must be yes, no or maybe (got {:?})",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eligibility() {
        assert!(Attendance::Yes.is_eligible());
        assert!(Attendance::Maybe.is_eligible());
        assert!(!Attendance::No.is_eligible());
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("YES".parse::<Attendance>().unwrap(), Attendance::Yes);
        assert_eq!(" maybe ".parse::<Attendance>().unwrap(), Attendance::Maybe);
        assert!(matches!(
            "perhaps".parse::<Attendance>(),
            Err(DomainError::InvalidInput(_))
        ));
    }
}
