//! Expansion configuration from TOML (`[expansion]` section)

use pseudorag_application::config::{DEFAULT_DEPTH, DEFAULT_MIN_RELEVANCE, ExpansionParams};
use pseudorag_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw expansion configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExpansionConfig {
    /// Minimum relevance an archetype needs to contribute questions
    pub min_relevance: f64,
    /// Requested decomposition depth
    pub depth: u32,
}

impl Default for FileExpansionConfig {
    fn default() -> Self {
        Self {
            min_relevance: DEFAULT_MIN_RELEVANCE,
            depth: DEFAULT_DEPTH,
        }
    }
}

impl FileExpansionConfig {
    /// Convert to application-level params, reporting out-of-range values.
    pub fn to_params(&self) -> (ExpansionParams, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        if !(0.0..=1.0).contains(&self.min_relevance) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ThresholdOutOfRange,
                format!(
                    "expansion.min_relevance: {} is outside [0, 1]",
                    self.min_relevance
                ),
            ));
        }

        if self.depth == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidDepth,
                "expansion.depth: must be at least 1",
            ));
        }

        let params = ExpansionParams::default()
            .with_min_relevance(self.min_relevance)
            .with_depth(self.depth);
        (params, issues)
    }
}
