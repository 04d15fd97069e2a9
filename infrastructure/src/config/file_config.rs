//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types on use.

use crate::venue::CatalogVenue;
use kanji_application::PlanningConfig;
use kanji_domain::BudgetRange;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("planning.top_dates cannot be 0")]
    NoProposalDates,

    #[error("planning.venues_per_proposal cannot be 0")]
    NoVenuesPerProposal,

    #[error("planning.fallback_interval_days cannot be 0")]
    InvalidFallbackInterval,

    #[error("default budget {min}-{max} is not a valid range")]
    InvalidBudget { min: i64, max: i64 },

    #[error("context.max_entries cannot be 0")]
    EmptyContextCache,

    #[error("context.ttl_seconds cannot be 0")]
    InvalidContextTtl,

    #[error("venue name cannot be empty")]
    EmptyVenueName,
}

/// Raw planning configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePlanningConfig {
    /// Number of top dates offered as proposals
    pub top_dates: usize,
    /// Venue candidates requested per proposal
    pub venues_per_proposal: usize,
    pub default_budget_min: i64,
    pub default_budget_max: i64,
    /// Spacing of synthetic dates when nobody proposed one
    pub fallback_interval_days: u64,
    /// Attach an alignment message to each proposal set
    pub alignment: bool,
}

impl Default for FilePlanningConfig {
    fn default() -> Self {
        let defaults = PlanningConfig::default();
        Self {
            top_dates: defaults.top_dates,
            venues_per_proposal: defaults.venues_per_proposal,
            default_budget_min: defaults.default_budget.min,
            default_budget_max: defaults.default_budget.max,
            fallback_interval_days: defaults.fallback_interval_days,
            alignment: true,
        }
    }
}

/// Raw per-thread context cache configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileContextConfig {
    pub max_entries: usize,
    pub ttl_seconds: u64,
}

impl Default for FileContextConfig {
    fn default() -> Self {
        Self {
            max_entries: 128,
            ttl_seconds: 3600,
        }
    }
}

impl FileContextConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

/// Output format written by the front-end
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutputFormat {
    #[default]
    Text,
    Json,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (None = use CLI default)
    pub format: Option<FileOutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL plan event log
    pub event_log: Option<PathBuf>,
    /// Diagnostic log file (instead of stderr)
    pub file: Option<PathBuf>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Proposal building settings
    pub planning: FilePlanningConfig,
    /// Per-thread context cache settings
    pub context: FileContextConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Logging settings
    pub logging: FileLoggingConfig,
    /// Offline venue catalog
    pub venues: Vec<CatalogVenue>,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let planning = &self.planning;
        if planning.top_dates == 0 {
            return Err(ConfigValidationError::NoProposalDates);
        }
        if planning.venues_per_proposal == 0 {
            return Err(ConfigValidationError::NoVenuesPerProposal);
        }
        if planning.fallback_interval_days == 0 {
            return Err(ConfigValidationError::InvalidFallbackInterval);
        }
        if planning.default_budget_min < 0 || planning.default_budget_min > planning.default_budget_max
        {
            return Err(ConfigValidationError::InvalidBudget {
                min: planning.default_budget_min,
                max: planning.default_budget_max,
            });
        }

        if self.context.max_entries == 0 {
            return Err(ConfigValidationError::EmptyContextCache);
        }
        if self.context.ttl_seconds == 0 {
            return Err(ConfigValidationError::InvalidContextTtl);
        }

        if self.venues.iter().any(|v| v.name.trim().is_empty()) {
            return Err(ConfigValidationError::EmptyVenueName);
        }

        Ok(())
    }

    /// Planning parameters for the proposal use case
    pub fn planning_config(&self) -> PlanningConfig {
        PlanningConfig::default()
            .with_top_dates(self.planning.top_dates)
            .with_venues_per_proposal(self.planning.venues_per_proposal)
            .with_default_budget(BudgetRange::new(
                self.planning.default_budget_min,
                self.planning.default_budget_max,
            ))
            .with_fallback_interval_days(self.planning.fallback_interval_days)
    }
}
