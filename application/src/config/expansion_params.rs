//! Expansion parameters - caller-controlled knobs of a single expansion.
//!
//! [`ExpansionParams`] groups the scalar parameters passed to
//! [`ExpandTopicUseCase`](crate::use_cases::expand_topic::ExpandTopicUseCase).
//! They are validated at the use case boundary.

use pseudorag_domain::DomainError;
use serde::{Deserialize, Serialize};

/// Default relevance threshold
pub const DEFAULT_MIN_RELEVANCE: f64 = 0.3;

/// Default decomposition depth
pub const DEFAULT_DEPTH: u32 = 1;

/// Expansion control parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpansionParams {
    /// Requested decomposition depth (>= 1). Only the first level is
    /// generated; the value is recorded in tree metadata.
    pub depth: u32,
    /// Archetypes scoring below this threshold contribute no questions.
    pub min_relevance: f64,
}

impl Default for ExpansionParams {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            min_relevance: DEFAULT_MIN_RELEVANCE,
        }
    }
}

impl ExpansionParams {
    // ==================== Builder Methods ====================

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_min_relevance(mut self, min_relevance: f64) -> Self {
        self.min_relevance = min_relevance;
        self
    }

    // ==================== Validation ====================

    /// Reject non-positive depth and thresholds outside `[0, 1]` (NaN included).
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.depth == 0 {
            return Err(DomainError::InvalidArgument(
                "depth must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.min_relevance) {
            return Err(DomainError::InvalidArgument(format!(
                "min_relevance must be within [0, 1], got {}",
                self.min_relevance
            )));
        }
        Ok(())
    }
}
