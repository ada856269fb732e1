//! Topic signals value object

use super::topic_domain::TopicDomain;
use crate::core::language::Language;

/// Lightweight signals derived from a raw topic query (Value Object)
///
/// Created once per expansion call and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSignals {
    query: String,
    entities: Vec<String>,
    language: Language,
    domain: TopicDomain,
}

impl TopicSignals {
    pub fn new(
        query: impl Into<String>,
        entities: Vec<String>,
        language: Language,
        domain: TopicDomain,
    ) -> Self {
        Self {
            query: query.into(),
            entities,
            language,
            domain,
        }
    }

    /// The raw query text
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Candidate entities in order of first occurrence
    pub fn entities(&self) -> &[String] {
        &self.entities
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn domain(&self) -> TopicDomain {
        self.domain
    }
}
