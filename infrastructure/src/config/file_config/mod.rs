//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; conversion to application types happens
//! in the `to_*`/`parse_*` helpers, which also report issues.

mod expansion;
mod history;
mod output;

pub use expansion::FileExpansionConfig;
pub use history::FileHistoryConfig;
pub use output::{FileOutputConfig, FileOutputFormat};

use pseudorag_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Expansion defaults
    pub expansion: FileExpansionConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Expansion history settings
    pub history: FileHistoryConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks the expansion ranges (errors) and the output format name
    /// (warning, falls back to outline).
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.expansion.to_params().1);
        issues.extend(self.output.parse_format().1);
        issues
    }
}
