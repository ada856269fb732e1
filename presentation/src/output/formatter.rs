//! Output formatter trait

use crate::cli::commands::OutputFormat;
use pseudorag_domain::QuestionTree;

/// Trait for formatting expanded trees
pub trait OutputFormatter {
    /// Format as a markdown outline
    fn format_outline(&self, tree: &QuestionTree) -> String;

    /// Format as JSON
    fn format_json(&self, tree: &QuestionTree) -> Result<String, serde_json::Error>;

    /// Format counts, distribution and sample questions
    fn format_summary(&self, tree: &QuestionTree) -> String;

    /// Format in the requested output format
    fn format(
        &self,
        tree: &QuestionTree,
        format: OutputFormat,
    ) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Outline => Ok(self.format_outline(tree)),
            OutputFormat::Json => self.format_json(tree),
            OutputFormat::Summary => Ok(self.format_summary(tree)),
        }
    }
}
