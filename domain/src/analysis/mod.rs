//! Topic analysis and relevance scoring.
//!
//! Both stages are heuristics standing in for a future NLP/ML component.
//! They sit behind the [`analyzer::TopicAnalyzer`] and
//! [`scorer::RelevanceScorer`] traits so a real model can be swapped in
//! without touching the orchestrator.

pub mod analyzer;
pub mod scorer;
pub mod signals;
pub mod topic_domain;
