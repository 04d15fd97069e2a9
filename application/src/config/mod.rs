//! Application-level configuration.
//!
//! - [`PlanningConfig`]: proposal building parameters (dates offered,
//!   venues per proposal, budget fallback, synthetic date spacing)

pub mod planning_config;

pub use planning_config::PlanningConfig;
