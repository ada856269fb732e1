//! Console output formatter for question trees

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use pseudorag_domain::{
    ArchetypeCode, Axis, Language, Quadrant, QuestionTree, export::outline, export::structured,
    registry,
};

/// Number of sample questions shown per archetype in the summary
const SAMPLES_PER_ARCHETYPE: usize = 2;

/// Per-query line of the batch totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionSummary {
    pub query: String,
    pub questions: usize,
    pub archetypes: usize,
}

impl ExpansionSummary {
    pub fn of(tree: &QuestionTree) -> Self {
        Self {
            query: tree.topic().to_string(),
            questions: tree.questions().len(),
            archetypes: tree.metadata().archetypes_used,
        }
    }
}

/// Formats trees for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Markdown outline, identical to the exported `.md` file
    pub fn format_outline(tree: &QuestionTree) -> String {
        outline::render(tree)
    }

    /// Structured JSON, identical to the exported `.json` file
    pub fn format_json(tree: &QuestionTree) -> Result<String, serde_json::Error> {
        structured::to_json(tree)
    }

    /// Several trees as one pretty-printed JSON array
    pub fn format_json_batch(trees: &[QuestionTree]) -> Result<String, serde_json::Error> {
        let values = trees
            .iter()
            .map(structured::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        serde_json::to_string_pretty(&values)
    }

    /// Counts, per-archetype distribution and the first questions of each archetype
    pub fn format_summary(tree: &QuestionTree) -> String {
        let metadata = tree.metadata();
        let groups = tree.by_archetype();
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Questionnaire: {}", tree.topic())));
        output.push('\n');

        output.push_str(&format!(
            "{} {}  {} {}\n",
            "Domain:".cyan().bold(),
            metadata.domain,
            "Language:".cyan().bold(),
            metadata.language
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Questions:".cyan().bold(),
            tree.questions().len()
        ));
        output.push_str(&format!(
            "{} {}/{}\n",
            "Archetypes:".cyan().bold(),
            metadata.archetypes_used,
            ArchetypeCode::ALL.len()
        ));

        if tree.is_empty() {
            output.push_str(&format!(
                "\n{}\n",
                "No archetype reached the relevance threshold.".yellow()
            ));
            output.push_str(&Self::footer());
            return output;
        }

        output.push_str(&Self::section_header("Distribution"));
        for (code, questions) in &groups {
            let archetype = registry::get(*code);
            output.push_str(&format!(
                "{} ({:12}): {:2} {}\n",
                code.as_str().yellow(),
                archetype.name_ru,
                questions.len(),
                "█".repeat(questions.len())
            ));
        }

        output.push_str(&Self::section_header("Sample questions"));
        for (code, questions) in &groups {
            let archetype = registry::get(*code);
            output.push_str(&format!(
                "\n{} ({})\n",
                archetype.name_ru.bold(),
                code
            ));
            for question in questions.iter().take(SAMPLES_PER_ARCHETYPE) {
                output.push_str(&format!("  - {}\n", question.text));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// The sixteen archetypes grouped by quadrant, with priority stars
    pub fn format_taxonomy() -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Information Archetypes"));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Total archetypes:".cyan().bold(),
            registry::all().len()
        ));
        for axis in Axis::ALL {
            let [first, second] = axis.letters();
            output.push_str(&format!("  {:12} {}/{}\n", axis.as_str(), first, second));
        }

        for quadrant in Quadrant::ALL {
            output.push_str(&Self::section_header(&format!(
                "{} ({})",
                quadrant.name(Language::En),
                quadrant.as_str()
            )));
            for archetype in registry::by_quadrant(quadrant) {
                output.push_str(&format!(
                    "  {} - {:15} ({:15}) {}\n",
                    archetype.code.as_str().yellow().bold(),
                    archetype.name_ru,
                    archetype.name_en,
                    Self::stars(archetype.default_priority as usize)
                ));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Totals for a batch of expansions
    pub fn format_batch_totals(results: &[ExpansionSummary]) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("Totals"));
        for result in results {
            output.push_str(&format!(
                "\n{}\n  Questions:  {}\n  Archetypes: {}/{}\n",
                result.query.bold(),
                result.questions,
                result.archetypes,
                ArchetypeCode::ALL.len()
            ));
        }

        let total: usize = results.iter().map(|r| r.questions).sum();
        output.push_str(&format!(
            "\n{} {}\n",
            "Total questions generated:".green().bold(),
            total
        ));
        output
    }

    /// `★` repeated `count` times
    pub fn stars(count: usize) -> String {
        "★".repeat(count)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_outline(&self, tree: &QuestionTree) -> String {
        Self::format_outline(tree)
    }

    fn format_json(&self, tree: &QuestionTree) -> Result<String, serde_json::Error> {
        Self::format_json(tree)
    }

    fn format_summary(&self, tree: &QuestionTree) -> String {
        Self::format_summary(tree)
    }
}
