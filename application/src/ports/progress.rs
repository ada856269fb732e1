//! Progress notification port
//!
//! Defines the interface for observing the stages of an expansion.

use pseudorag_domain::{QuestionTree, RankedArchetype, TopicSignals};

/// Callback for progress updates during an expansion
///
/// Implementations live in the presentation layer and can display
/// the ranking in various ways (console, web UI, etc.)
pub trait ExpansionProgressNotifier: Send + Sync {
    /// Called once the query has been analyzed
    fn on_analyzed(&self, signals: &TopicSignals);

    /// Called with the full ranking, best first
    fn on_ranked(&self, ranking: &[RankedArchetype], min_relevance: f64);

    /// Called after an archetype above the threshold produced its questions
    fn on_archetype_expanded(&self, ranked: &RankedArchetype, question_count: usize);

    /// Called when the tree has been assembled
    fn on_complete(&self, _tree: &QuestionTree) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ExpansionProgressNotifier for NoProgress {
    fn on_analyzed(&self, _signals: &TopicSignals) {}
    fn on_ranked(&self, _ranking: &[RankedArchetype], _min_relevance: f64) {}
    fn on_archetype_expanded(&self, _ranked: &RankedArchetype, _question_count: usize) {}
}
