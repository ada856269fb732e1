//! Tree exporter port
//!
//! Writes a rendered question tree to an output target. Rendering itself
//! is pure and lives in the domain; implementations only own the I/O.

use pseudorag_domain::{ExportFormat, QuestionTree};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while exporting a tree
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O failure writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ExportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Writes a tree in one export format.
///
/// Implementations must acquire the output target in a scoped way and
/// release it on every path, and must not leave a partially written target
/// behind on failure. The tree is only borrowed.
pub trait TreeExporter {
    /// Write `tree` rendered as `format` to `path`, returning the written path.
    fn export(
        &self,
        tree: &QuestionTree,
        format: ExportFormat,
        path: &Path,
    ) -> Result<PathBuf, ExportError>;
}
