//! Proposal slot value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Number of proposals offered for voting
pub const SLOT_COUNT: u8 = 3;

/// One of the proposal positions a participant can vote for (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ProposalSlot(u8);

impl ProposalSlot {
    pub fn new(slot: u8) -> Result<Self, DomainError> {
        if (1..=SLOT_COUNT).contains(&slot) {
            Ok(Self(slot))
        } else {
            Err(DomainError::InvalidInput(format!(
                "proposal slot must be between 1 and {} (got {})",
                SLOT_COUNT, slot
            )))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Every legal slot in ascending order
    pub fn all() -> impl Iterator<Item = ProposalSlot> {
        (1..=SLOT_COUNT).map(ProposalSlot)
    }

    /// Zero-based position in a proposal list
    pub fn index(&self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl TryFrom<u8> for ProposalSlot {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProposalSlot> for u8 {
    fn from(slot: ProposalSlot) -> Self {
        slot.0
    }
}

impl std::fmt::Display for ProposalSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProposalSlot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u8 = s.trim().parse().map_err(|_| {
            DomainError::InvalidInput(format!("proposal slot must be a number (got {:?})", s))
        })?;
        Self::new(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_range() {
        assert!(ProposalSlot::new(1).is_ok());
        assert!(ProposalSlot::new(3).is_ok());
        assert!(matches!(ProposalSlot::new(0), Err(DomainError::InvalidInput(_))));
        assert!(matches!(ProposalSlot::new(4), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_all_slots_ascending() {
        let slots: Vec<u8> = ProposalSlot::all().map(|s| s.get()).collect();
        assert_eq!(slots, vec![1, 2, 3]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("2".parse::<ProposalSlot>().unwrap().get(), 2);
        assert!("two".parse::<ProposalSlot>().is_err());
        assert!("9".parse::<ProposalSlot>().is_err());
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<ProposalSlot>("3").is_ok());
        assert!(serde_json::from_str::<ProposalSlot>("7").is_err());
    }
}
