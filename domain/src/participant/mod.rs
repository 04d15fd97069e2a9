//! Participant responses
//!
//! Each participant submits attendance, date candidates and preferences
//! asynchronously and in any order. Every submission is a partial update
//! merged into the participant's record for the plan.

pub mod attendance;
pub mod budget;
pub mod response;

pub use attendance::Attendance;
pub use budget::BudgetRange;
pub use response::{DatesInput, ParticipantResponse, ResponseUpdate};
