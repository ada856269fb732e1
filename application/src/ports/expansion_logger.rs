//! Port for structured expansion history.
//!
//! Defines the [`ExpansionLogger`] trait for recording one machine-readable
//! event per expansion (query, domain, counts) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port keeps a replayable history
//! of what was expanded and with which parameters.

use pseudorag_domain::QuestionTree;
use serde_json::{Value, json};

/// A structured expansion event for logging.
pub struct ExpansionEvent {
    /// Event type identifier (e.g., "expansion_completed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ExpansionEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    /// Summary event for an assembled tree.
    pub fn completed(tree: &QuestionTree, min_relevance: f64) -> Self {
        let metadata = tree.metadata();
        Self::new(
            "expansion_completed",
            json!({
                "query": tree.topic(),
                "domain": metadata.domain.label(),
                "language": metadata.language.as_str(),
                "depth": metadata.depth,
                "min_relevance": min_relevance,
                "archetypes_used": metadata.archetypes_used,
                "total_questions": metadata.total_questions,
            }),
        )
    }
}

/// Port for logging expansion events to a structured log.
///
/// The `log` method is synchronous and non-fallible; logging failures
/// never interrupt an expansion.
pub trait ExpansionLogger: Send + Sync {
    fn log(&self, event: ExpansionEvent);
}

/// No-op implementation for tests and when history is disabled.
pub struct NoExpansionLogger;

impl ExpansionLogger for NoExpansionLogger {
    fn log(&self, _event: ExpansionEvent) {}
}
