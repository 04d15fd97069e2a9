//! Core domain concepts shared across all subdomains.
//!
//! - [`id`]: opaque identifiers for plans, channels and participants
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod id;
