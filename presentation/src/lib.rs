//! Presentation layer for kanji
//!
//! This crate contains the CLI definition, the planning REPL and
//! output formatters.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use chat::{ChatCommand, CommandParseError, PlanningRepl, ReplError};
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use output::reply::Reply;
