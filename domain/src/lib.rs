//! Domain layer for pseudorag
//!
//! This crate contains the archetype taxonomy, the topic heuristics and
//! question generation. It performs no I/O and has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Archetypes
//!
//! Sixteen fixed "information-shape" categories, one per combination of
//! four binary axes (materiality, dynamics, scale, structure). Each is
//! identified by its 4-letter code, e.g. `MDCF` (material, dynamic,
//! complex, fluid: a city).
//!
//! ## Expansion
//!
//! A topic query is analyzed into [`TopicSignals`], every archetype is
//! scored against them, and archetypes above a threshold contribute their
//! full template set to a [`QuestionTree`].

pub mod analysis;
pub mod core;
pub mod export;
pub mod questions;
pub mod taxonomy;

// Re-export commonly used types
pub use analysis::{
    analyzer::{HeuristicTopicAnalyzer, TopicAnalyzer},
    scorer::{HeuristicRelevanceScorer, RankedArchetype, RelevanceScorer, domain_bonus, rank},
    signals::TopicSignals,
    topic_domain::TopicDomain,
};
pub use core::{
    error::DomainError,
    language::Language,
    string::file_stem,
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use export::ExportFormat;
pub use questions::{
    entities::{AnswerType, Question, QuestionTree, TreeMetadata},
    generator::QuestionGenerator,
};
pub use taxonomy::{Archetype, ArchetypeCode, Axis, Quadrant, registry};
