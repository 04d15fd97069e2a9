//! Planning sessions
//!
//! One plan lives in one chat thread. It records which channel it was
//! started in, a lifecycle label, and the winning proposal once decided.

pub mod entities;

pub use entities::{Plan, PlanStatus};
