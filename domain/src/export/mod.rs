//! Export views of a question tree.
//!
//! Both views are pure, format-only transformations; neither touches the
//! filesystem. Writing to disk lives behind the application's exporter port.

pub mod outline;
pub mod structured;

use crate::questions::entities::QuestionTree;
use serde::{Deserialize, Serialize};

/// The two supported export views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Nested JSON record mirroring the tree
    Structured,
    /// Markdown outline grouped by archetype
    Outline,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Structured, ExportFormat::Outline];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Structured => "json",
            ExportFormat::Outline => "md",
        }
    }

    /// Render the tree in this format
    pub fn render(&self, tree: &QuestionTree) -> Result<String, serde_json::Error> {
        match self {
            ExportFormat::Structured => structured::to_json(tree),
            ExportFormat::Outline => Ok(outline::render(tree)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Structured => write!(f, "structured"),
            ExportFormat::Outline => write!(f, "outline"),
        }
    }
}
