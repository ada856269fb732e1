//! Topic analysis
//!
//! Pure heuristics behind a narrow trait so that a real NLP component can
//! replace them without touching the orchestrator.

use super::signals::TopicSignals;
use super::topic_domain::TopicDomain;
use crate::core::language::Language;
use regex::Regex;
use std::sync::LazyLock;

/// A capitalized word: one uppercase letter followed by lowercase letters.
static ENTITY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\p{Lu}\p{Ll}+\b").expect("static entity pattern"));

static CYRILLIC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{Cyrillic}&&\p{L}]").expect("static cyrillic pattern"));

/// Extracts topic signals from a raw query
pub trait TopicAnalyzer {
    fn analyze(&self, query: &str) -> TopicSignals;
}

/// Default analyzer: capitalized-token entities, script-based language, trigger-table domain
#[derive(Debug, Clone, Default)]
pub struct HeuristicTopicAnalyzer;

impl HeuristicTopicAnalyzer {
    /// Candidate entities. An approximation, not named-entity recognition.
    pub fn extract_entities(text: &str) -> Vec<String> {
        ENTITY_PATTERN
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    pub fn detect_language(text: &str) -> Language {
        if CYRILLIC_PATTERN.is_match(text) {
            Language::Ru
        } else {
            Language::En
        }
    }
}

impl TopicAnalyzer for HeuristicTopicAnalyzer {
    fn analyze(&self, query: &str) -> TopicSignals {
        TopicSignals::new(
            query,
            Self::extract_entities(query),
            Self::detect_language(query),
            TopicDomain::classify(query),
        )
    }
}
