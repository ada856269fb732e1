//! Configuration file loading for pseudorag
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./pseudorag.toml` or `./.pseudorag.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/pseudorag/config.toml`
//! 4. Fallback: `~/.config/pseudorag/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileExpansionConfig, FileHistoryConfig, FileOutputConfig, FileOutputFormat,
};
pub use loader::ConfigLoader;
