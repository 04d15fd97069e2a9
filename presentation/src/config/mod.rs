//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use crate::cli::commands::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Combine the command line with the config file
    ///
    /// A format given on the command line wins over the configured one.
    /// Color is off when either side turns it off, and always off for JSON.
    pub fn resolve(
        cli_format: Option<OutputFormat>,
        configured_format: Option<OutputFormat>,
        configured_color: bool,
        no_color: bool,
    ) -> Self {
        let format = cli_format
            .or(configured_format)
            .unwrap_or(OutputFormat::Text);
        Self {
            format,
            color: configured_color && !no_color && format == OutputFormat::Text,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplConfig {
    /// Show the welcome banner and a prompt before each line
    pub interactive: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self { interactive: true }
    }
}
