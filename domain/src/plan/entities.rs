//! Plan entity and its lifecycle label

use crate::core::error::DomainError;
use crate::core::id::{ChannelId, PlanId};
use crate::voting::ProposalSlot;
use serde::{Deserialize, Serialize};

/// Lifecycle label of a plan
///
/// The label is informational: no operation is rejected because of the
/// current status. Use cases only ever move it forward (see [`PlanStatus::advance`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    /// Collecting attendance
    #[default]
    Attendance,
    /// Collecting date candidates
    Dates,
    /// Collecting area / budget / cuisine preferences
    Prefs,
    /// Proposals are out, waiting for votes
    Confirm,
    /// A winner has been finalized
    Done,
}

impl PlanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Attendance => "attendance",
            PlanStatus::Dates => "dates",
            PlanStatus::Prefs => "prefs",
            PlanStatus::Confirm => "confirm",
            PlanStatus::Done => "done",
        }
    }

    /// Return whichever of `self` and `next` is further along
    pub fn advance(self, next: PlanStatus) -> PlanStatus {
        self.max(next)
    }
}

impl std::fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PlanStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "attendance" => Ok(PlanStatus::Attendance),
            "dates" => Ok(PlanStatus::Dates),
            "prefs" => Ok(PlanStatus::Prefs),
            "confirm" => Ok(PlanStatus::Confirm),
            "done" => Ok(PlanStatus::Done),
            other => Err(DomainError::InvalidInput(format!(
                "unknown plan status: {}",
                other
            ))),
        }
    }
}

/// A planning session tied to one conversation thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: PlanId,
    /// Channel the plan was started in; never changes after creation
    pub channel: ChannelId,
    pub title: Option<String>,
    pub status: PlanStatus,
    /// Winning proposal slot, once finalized
    pub decision: Option<ProposalSlot>,
}

impl Plan {
    pub fn new(id: PlanId, channel: ChannelId) -> Self {
        Self {
            id,
            channel,
            title: None,
            status: PlanStatus::default(),
            decision: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn is_decided(&self) -> bool {
        self.decision.is_some()
    }
}
