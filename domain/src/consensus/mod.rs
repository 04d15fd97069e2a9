//! Preference aggregation
//!
//! Turns the participant responses of a plan into one consensus summary:
//! ranked dates, the most requested area, the median budget and the top
//! cuisines. Only `yes`/`maybe` responses count.
//!
//! Every ranking breaks ties by first-seen order, where "first seen" is the
//! order of the responses passed in. Stores hand responses out in insertion
//! order so the result is reproducible.

pub mod ranking;
pub mod summary;

pub use ranking::{FrequencyRanking, median};
pub use summary::{ConsensusSummary, DateCount, TOP_CUISINES, summarize, summarize_with_budget};
