//! Configuration file loading for kanji
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. `KANJI_*` environment variables (`__` separates sections)
//! 3. Project root: `./kanji.toml` or `./.kanji.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/kanji/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileContextConfig, FileLoggingConfig, FileOutputConfig,
    FileOutputFormat, FilePlanningConfig,
};
pub use loader::ConfigLoader;
