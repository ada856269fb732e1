//! Expand Topic use case
//!
//! Orchestrates the linear expansion pipeline:
//!
//! ```text
//! Received(query) → Analyzed(signals) → Scored(ranking)
//!     → Filtered(≥ threshold) → Generated(questions) → Assembled(tree)
//! ```
//!
//! Each stage is a pure function of the previous one plus the static
//! taxonomy and the caller's parameters. No branching, no retries.

use crate::config::ExpansionParams;
use crate::ports::expansion_logger::{ExpansionEvent, ExpansionLogger, NoExpansionLogger};
use crate::ports::progress::{ExpansionProgressNotifier, NoProgress};
use pseudorag_domain::{
    DomainError, HeuristicRelevanceScorer, HeuristicTopicAnalyzer, QuestionGenerator,
    QuestionTree, RelevanceScorer, TopicAnalyzer, TreeMetadata, rank,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during an expansion
#[derive(Error, Debug, PartialEq)]
pub enum ExpandTopicError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Domain error: {0}")]
    Domain(DomainError),
}

impl From<DomainError> for ExpandTopicError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::InvalidArgument(message) => ExpandTopicError::InvalidArgument(message),
            other => ExpandTopicError::Domain(other),
        }
    }
}

/// Input for the ExpandTopic use case
#[derive(Debug, Clone)]
pub struct ExpandTopicInput {
    /// Raw topic query
    pub query: String,
    pub params: ExpansionParams,
}

impl ExpandTopicInput {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            params: ExpansionParams::default(),
        }
    }

    pub fn with_params(mut self, params: ExpansionParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.params.depth = depth;
        self
    }

    pub fn with_min_relevance(mut self, min_relevance: f64) -> Self {
        self.params.min_relevance = min_relevance;
        self
    }
}

/// Use case for expanding a topic into a question tree
pub struct ExpandTopicUseCase<A: TopicAnalyzer, S: RelevanceScorer> {
    analyzer: A,
    scorer: S,
    logger: Arc<dyn ExpansionLogger>,
}

impl ExpandTopicUseCase<HeuristicTopicAnalyzer, HeuristicRelevanceScorer> {
    /// Use case wired with the default heuristics
    pub fn heuristic() -> Self {
        Self::new(HeuristicTopicAnalyzer, HeuristicRelevanceScorer)
    }
}

impl<A: TopicAnalyzer, S: RelevanceScorer> ExpandTopicUseCase<A, S> {
    pub fn new(analyzer: A, scorer: S) -> Self {
        Self {
            analyzer,
            scorer,
            logger: Arc::new(NoExpansionLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ExpansionLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub fn execute(&self, input: ExpandTopicInput) -> Result<QuestionTree, ExpandTopicError> {
        self.execute_with_progress(input, &NoProgress)
    }

    /// Execute the use case with progress callbacks
    pub fn execute_with_progress(
        &self,
        input: ExpandTopicInput,
        progress: &dyn ExpansionProgressNotifier,
    ) -> Result<QuestionTree, ExpandTopicError> {
        input.params.validate()?;
        let ExpansionParams {
            depth,
            min_relevance,
        } = input.params;

        info!(
            "Expanding '{}' (depth {}, min relevance {})",
            input.query, depth, min_relevance
        );

        // Analyzed
        let signals = self.analyzer.analyze(&input.query);
        debug!(
            "Signals: domain={}, language={}, entities={:?}",
            signals.domain(),
            signals.language(),
            signals.entities()
        );
        progress.on_analyzed(&signals);

        // Scored
        let ranking = rank(&self.scorer, &signals);
        progress.on_ranked(&ranking, min_relevance);

        if depth > 1 {
            debug!(
                "Depth {} requested; only first-level questions are generated",
                depth
            );
        }

        // Filtered + Generated
        let mut generator = QuestionGenerator::new();
        let mut questions = Vec::new();
        let mut archetypes_used = 0;

        for ranked in ranking.iter().filter(|r| r.passes(min_relevance)) {
            let generated = generator.generate(&input.query, ranked.archetype);
            debug!(
                "{} ({:.2}): {} questions",
                ranked.archetype.code,
                ranked.score,
                generated.len()
            );
            progress.on_archetype_expanded(ranked, generated.len());
            questions.extend(generated);
            archetypes_used += 1;
        }

        // Assembled
        let metadata = TreeMetadata {
            total_questions: questions.len(),
            depth,
            domain: signals.domain(),
            language: signals.language(),
            archetypes_used,
        };
        let tree = QuestionTree::new(input.query.clone(), input.query, questions, metadata);

        info!(
            "Generated {} questions from {} archetypes",
            generator.issued(),
            archetypes_used
        );

        self.logger
            .log(ExpansionEvent::completed(&tree, min_relevance));
        progress.on_complete(&tree);

        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::expansion_logger::ExpansionEvent;
    use pseudorag_domain::{
        Archetype, ArchetypeCode, Language, RankedArchetype, TopicDomain, TopicSignals,
        registry,
    };
    use std::collections::HashSet;
    use std::sync::Mutex;

    fn expand(query: &str, min_relevance: f64) -> QuestionTree {
        ExpandTopicUseCase::heuristic()
            .execute(ExpandTopicInput::new(query).with_min_relevance(min_relevance))
            .unwrap()
    }

    fn used_codes(tree: &QuestionTree) -> HashSet<ArchetypeCode> {
        tree.questions().iter().map(|q| q.archetype_code).collect()
    }

    // ==================== Reference queries ====================

    #[test]
    fn test_cities_of_europe() {
        let tree = expand("Города Европы", 0.4);
        let metadata = tree.metadata();
        assert_eq!(metadata.domain, TopicDomain::Urbanism);
        assert_eq!(metadata.domain.label(), "урбанистика");
        assert_eq!(metadata.language, Language::Ru);
        assert!(metadata.archetypes_used > 0);
        assert_eq!(metadata.total_questions, tree.questions().len());
        assert_eq!(used_codes(&tree).len(), metadata.archetypes_used);
    }

    #[test]
    fn test_transport_systems_includes_machine() {
        let tree = expand("Транспортные системы", 0.35);
        assert_eq!(tree.metadata().domain, TopicDomain::Technology);
        assert!(used_codes(&tree).contains(&ArchetypeCode::Mdco));
    }

    #[test]
    fn test_empty_query() {
        let tree = expand("", 0.3);
        let metadata = tree.metadata();
        assert_eq!(metadata.domain.label(), "general");
        assert_eq!(metadata.language, Language::En);

        // Only the priority-derived base can clear the threshold
        let expected: HashSet<ArchetypeCode> = registry::all()
            .iter()
            .filter(|a| a.default_priority as f64 / 5.0 >= 0.3)
            .map(|a| a.code)
            .collect();
        assert_eq!(used_codes(&tree), expected);
        assert_eq!(metadata.archetypes_used, 15);
        assert!(!used_codes(&tree).contains(&ArchetypeCode::Msef));
    }

    // ==================== Ordering ====================

    #[test]
    fn test_questions_follow_rank_then_template_order() {
        let tree = expand("", 0.3);
        let ids: Vec<&str> = tree.questions().iter().map(|q| q.id.as_str()).collect();
        // Priority 5 archetypes lead in canonical order
        assert_eq!(&ids[..2], ["MSCO.1", "MSCO.2"]);
        assert_eq!(ids[6], "MDCO.1");

        // Within an archetype, numbering is contiguous
        let msco: Vec<&str> = ids.iter().copied().filter(|id| id.starts_with("MSCO.")).collect();
        assert_eq!(msco, ["MSCO.1", "MSCO.2", "MSCO.3", "MSCO.4", "MSCO.5", "MSCO.6"]);
    }

    #[test]
    fn test_archetypes_contribute_whole_template_lists() {
        let tree = expand("Животные Африки", 0.6);
        for (code, questions) in tree.by_archetype() {
            assert_eq!(
                questions.len(),
                pseudorag_domain::questions::templates::templates_for(code).len()
            );
        }
    }

    #[test]
    fn test_ids_unique() {
        let tree = expand("Города Европы", 0.0);
        let ids: HashSet<&str> = tree.questions().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids.len(), tree.questions().len());
        assert_eq!(tree.metadata().archetypes_used, 16);
    }

    // ==================== Properties ====================

    #[test]
    fn test_monotone_filtering() {
        for query in ["", "Города Европы", "Транспортные системы", "Животные Африки", "culture"] {
            let low = expand(query, 0.3).metadata().archetypes_used;
            let high = expand(query, 0.4).metadata().archetypes_used;
            assert!(high <= low, "{}: {} > {}", query, high, low);
        }
    }

    #[test]
    fn test_idempotent() {
        let a = expand("Города Европы", 0.4);
        let b = expand("Города Европы", 0.4);
        let view = |t: &QuestionTree| {
            t.questions()
                .iter()
                .map(|q| (q.id.clone(), q.text.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(view(&a), view(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_threshold_excluding_everything_yields_empty_tree() {
        // No archetype scores 1.0 for an English query without keywords,
        // apart from the priority-5 ones
        let tree = expand("zzz", 1.0);
        assert_eq!(tree.metadata().archetypes_used, 5);

        let tree = ExpandTopicUseCase::new(HeuristicTopicAnalyzer, ConstantScorer(0.1))
            .execute(ExpandTopicInput::new("Города").with_min_relevance(0.5))
            .unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.metadata().total_questions, 0);
        assert_eq!(tree.metadata().archetypes_used, 0);
    }

    #[test]
    fn test_depth_is_recorded_but_does_not_change_output() {
        let shallow = expand("Города Европы", 0.4);
        let deep = ExpandTopicUseCase::heuristic()
            .execute(
                ExpandTopicInput::new("Города Европы")
                    .with_min_relevance(0.4)
                    .with_depth(3),
            )
            .unwrap();
        assert_eq!(deep.metadata().depth, 3);
        assert_eq!(deep.questions(), shallow.questions());
        assert!(deep.questions().iter().all(|q| q.depth == 1));
    }

    // ==================== Validation ====================

    #[test]
    fn test_zero_depth_rejected() {
        let result = ExpandTopicUseCase::heuristic()
            .execute(ExpandTopicInput::new("Города").with_depth(0));
        assert!(matches!(result, Err(ExpandTopicError::InvalidArgument(_))));
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let use_case = ExpandTopicUseCase::heuristic();
        for threshold in [-0.1, 1.5, f64::NAN] {
            let result =
                use_case.execute(ExpandTopicInput::new("Города").with_min_relevance(threshold));
            assert!(matches!(result, Err(ExpandTopicError::InvalidArgument(_))));
        }
    }

    #[test]
    fn test_domain_error_conversion() {
        let err: ExpandTopicError = DomainError::ArchetypeNotFound("XXXX".to_string()).into();
        assert!(matches!(err, ExpandTopicError::Domain(_)));
    }

    // ==================== Ports ====================

    struct ConstantScorer(f64);

    impl RelevanceScorer for ConstantScorer {
        fn score(&self, _archetype: &Archetype, _signals: &TopicSignals) -> f64 {
            self.0
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<(String, serde_json::Value)>>,
    }

    impl ExpansionLogger for RecordingLogger {
        fn log(&self, event: ExpansionEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type.to_string(), event.payload));
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        calls: Mutex<Vec<String>>,
    }

    impl ExpansionProgressNotifier for RecordingProgress {
        fn on_analyzed(&self, signals: &TopicSignals) {
            self.calls
                .lock()
                .unwrap()
                .push(format!("analyzed:{}", signals.domain()));
        }

        fn on_ranked(&self, ranking: &[RankedArchetype], _min_relevance: f64) {
            self.calls
                .lock()
                .unwrap()
                .push(format!("ranked:{}", ranking.len()));
        }

        fn on_archetype_expanded(&self, ranked: &RankedArchetype, question_count: usize) {
            self.calls
                .lock()
                .unwrap()
                .push(format!("expanded:{}:{}", ranked.archetype.code, question_count));
        }

        fn on_complete(&self, tree: &QuestionTree) {
            self.calls
                .lock()
                .unwrap()
                .push(format!("complete:{}", tree.questions().len()));
        }
    }

    #[test]
    fn test_constant_scorer_keeps_canonical_order() {
        let tree = ExpandTopicUseCase::new(HeuristicTopicAnalyzer, ConstantScorer(0.5))
            .execute(ExpandTopicInput::new("x"))
            .unwrap();
        let codes: Vec<ArchetypeCode> = tree
            .by_archetype()
            .into_iter()
            .map(|(code, _)| code)
            .collect();
        assert_eq!(codes, ArchetypeCode::ALL.to_vec());
        assert_eq!(tree.questions()[0].id, "MSEO.1");
    }

    #[test]
    fn test_logger_receives_completion_event() {
        let logger = Arc::new(RecordingLogger::default());
        let use_case = ExpandTopicUseCase::heuristic().with_logger(logger.clone());
        let tree = use_case
            .execute(ExpandTopicInput::new("Города Европы").with_min_relevance(0.4))
            .unwrap();

        let events = logger.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        let (event_type, payload) = &events[0];
        assert_eq!(event_type, "expansion_completed");
        assert_eq!(payload["query"], "Города Европы");
        assert_eq!(payload["domain"], "урбанистика");
        assert_eq!(payload["min_relevance"], 0.4);
        assert_eq!(payload["total_questions"], tree.questions().len());
    }

    #[test]
    fn test_progress_sequence() {
        let progress = RecordingProgress::default();
        let tree = ExpandTopicUseCase::heuristic()
            .execute_with_progress(
                ExpandTopicInput::new("Транспортные системы").with_min_relevance(0.35),
                &progress,
            )
            .unwrap();

        let calls = progress.calls.lock().unwrap();
        assert_eq!(calls[0], "analyzed:техника");
        assert_eq!(calls[1], "ranked:16");
        assert_eq!(
            calls.iter().filter(|c| c.starts_with("expanded:")).count(),
            tree.metadata().archetypes_used
        );
        assert_eq!(
            calls.last().unwrap(),
            &format!("complete:{}", tree.questions().len())
        );
    }

    #[test]
    fn test_invalid_input_reports_no_progress() {
        let progress = RecordingProgress::default();
        let result = ExpandTopicUseCase::heuristic()
            .execute_with_progress(ExpandTopicInput::new("x").with_depth(0), &progress);
        assert!(result.is_err());
        assert!(progress.calls.lock().unwrap().is_empty());
    }
}
