//! Archetype relevance scoring
//!
//! The score is a ranking/thresholding heuristic in `[0, 1]`, not a
//! probability:
//!
//! ```text
//! score = min(priority / 5 + 0.1 × keyword_hits + domain_bonus, 1.0)
//! ```
//!
//! Keyword hits count every keyword entry found as a case-insensitive
//! substring of the query; overlapping entries each add 0.1.

use super::signals::TopicSignals;
use super::topic_domain::TopicDomain;
use crate::taxonomy::{Archetype, ArchetypeCode, registry};

/// Bonus per matching keyword
pub const KEYWORD_BONUS: f64 = 0.1;

/// Upper bound of any score
pub const MAX_SCORE: f64 = 1.0;

/// Scores how applicable an archetype is to a topic
pub trait RelevanceScorer {
    fn score(&self, archetype: &Archetype, signals: &TopicSignals) -> f64;
}

/// Default scorer: priority base + keyword bonus + domain bonus, capped at 1.0
#[derive(Debug, Clone, Default)]
pub struct HeuristicRelevanceScorer;

impl HeuristicRelevanceScorer {
    /// Number of the archetype's keywords (in the query language) found in the query
    pub fn keyword_hits(archetype: &Archetype, signals: &TopicSignals) -> usize {
        let query = signals.query().to_lowercase();
        archetype
            .keywords(signals.language())
            .iter()
            .filter(|kw| query.contains(&kw.to_lowercase()))
            .count()
    }
}

impl RelevanceScorer for HeuristicRelevanceScorer {
    fn score(&self, archetype: &Archetype, signals: &TopicSignals) -> f64 {
        let mut relevance = archetype.default_priority as f64 / 5.0;
        relevance += Self::keyword_hits(archetype, signals) as f64 * KEYWORD_BONUS;
        relevance += domain_bonus(signals.domain(), archetype.code);
        relevance.min(MAX_SCORE)
    }
}

/// Additive bias per (domain, archetype). Unlisted pairs get nothing.
pub fn domain_bonus(domain: TopicDomain, code: ArchetypeCode) -> f64 {
    use ArchetypeCode::*;

    match (domain, code) {
        (TopicDomain::Urbanism, Msco | Mdco | Mdcf | Adcf) => 0.3,
        (TopicDomain::Urbanism, Ascf | Aseo | Mdef) => 0.2,

        (TopicDomain::Biology, Mdef) => 0.4,
        (TopicDomain::Biology, Mscf) => 0.3,
        (TopicDomain::Biology, Aseo | Asco) => 0.2,

        (TopicDomain::Technology, Mdco) => 0.4,
        (TopicDomain::Technology, Mdeo | Adco) => 0.3,
        (TopicDomain::Technology, Aseo) => 0.2,

        _ => 0.0,
    }
}

/// An archetype paired with its relevance score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedArchetype {
    pub archetype: &'static Archetype,
    pub score: f64,
}

impl RankedArchetype {
    pub fn passes(&self, min_relevance: f64) -> bool {
        self.score >= min_relevance
    }
}

/// Score every archetype and sort descending.
///
/// The sort is stable over canonical registry order, so ties keep it.
pub fn rank(scorer: &dyn RelevanceScorer, signals: &TopicSignals) -> Vec<RankedArchetype> {
    let mut ranked: Vec<RankedArchetype> = registry::all()
        .iter()
        .map(|archetype| RankedArchetype {
            archetype,
            score: scorer.score(archetype, signals),
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}
