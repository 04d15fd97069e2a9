//! CLI command definitions

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored text
    Text,
    /// One JSON object per command
    Json,
}

/// CLI arguments for kanji
#[derive(Parser, Debug)]
#[command(name = "kanji")]
#[command(author, version, about = "Group event planning - collect answers, propose, vote")]
#[command(long_about = r#"
kanji coordinates a group event inside a conversation thread.

Participants answer attendance, candidate dates and preferences in any
order. kanji ranks the answers into up to three proposals, collects votes
and finalizes the winner once everyone who is coming has voted.

Commands are read one per line from stdin (or --script):
  start <thread> <channel> [title]
  attend <thread> <user> yes|no|maybe
  dates <thread> <user> <d1,d2,...>
  prefs <thread> <user> [area=..] [budget=min-max] [cuisine=a,b]
  propose <thread>
  vote <thread> <user> <slot>
  tally <thread> | finalize <thread> | status <thread> [label]
  latest <channel> | help | quit

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./kanji.toml        Project-level config
3. ~/.config/kanji/config.toml   Global config
"#)]
pub struct Cli {
    /// Read commands from a file instead of stdin
    #[arg(short, long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Anchor date for synthesized proposal dates (YYYY-MM-DD, default: today)
    #[arg(long, value_name = "DATE")]
    pub today: Option<NaiveDate>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the welcome banner and prompts
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
