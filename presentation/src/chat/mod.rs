//! Planning REPL module
//!
//! Reads one command per line from stdin or a script file and runs it
//! against the planning use cases.

mod command;
mod repl;

pub use command::{ChatCommand, CommandParseError};
pub use repl::{PlanningRepl, ReplError};
