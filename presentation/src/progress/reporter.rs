//! Progress reporting for topic expansion
//!
//! Prints the detected signals and the archetype ranking to stderr, so
//! stdout stays clean for the formatted tree.

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use pseudorag_application::ports::progress::ExpansionProgressNotifier;
use pseudorag_domain::{QuestionTree, RankedArchetype, TopicSignals};

/// Text-based reporter for the expansion stages
#[derive(Debug, Default)]
pub struct ConsoleProgress;

impl ConsoleProgress {
    pub fn new() -> Self {
        Self
    }

    /// Stars for a score: one per full fifth
    pub fn score_stars(score: f64) -> String {
        ConsoleFormatter::stars((score * 5.0).floor() as usize)
    }

    fn signals_lines(signals: &TopicSignals) -> Vec<String> {
        vec![
            format!("{} '{}'", "Expanding:".cyan().bold(), signals.query()),
            format!("  {} {}", "Domain:".bold(), signals.domain()),
            format!("  {} {}", "Language:".bold(), signals.language()),
        ]
    }

    fn ranking_lines(ranking: &[RankedArchetype], min_relevance: f64) -> Vec<String> {
        let mut lines = vec![format!(
            "{} (>= {:.2})",
            "Archetype relevance".cyan().bold(),
            min_relevance
        )];
        lines.extend(
            ranking
                .iter()
                .filter(|r| r.passes(min_relevance))
                .map(|r| {
                    format!(
                        "  {} ({}): {:.2} {}",
                        r.archetype.code.as_str().yellow(),
                        r.archetype.name_ru,
                        r.score,
                        Self::score_stars(r.score)
                    )
                }),
        );
        lines
    }

    fn expanded_line(ranked: &RankedArchetype, question_count: usize) -> String {
        format!(
            "  {} {}: {} questions",
            "v".green(),
            ranked.archetype.code,
            question_count
        )
    }
}

impl ExpansionProgressNotifier for ConsoleProgress {
    fn on_analyzed(&self, signals: &TopicSignals) {
        for line in Self::signals_lines(signals) {
            eprintln!("{}", line);
        }
    }

    fn on_ranked(&self, ranking: &[RankedArchetype], min_relevance: f64) {
        for line in Self::ranking_lines(ranking, min_relevance) {
            eprintln!("{}", line);
        }
    }

    fn on_archetype_expanded(&self, ranked: &RankedArchetype, question_count: usize) {
        eprintln!("{}", Self::expanded_line(ranked, question_count));
    }

    fn on_complete(&self, tree: &QuestionTree) {
        eprintln!(
            "{} {}\n",
            "Total questions generated:".green().bold(),
            tree.questions().len()
        );
    }
}
