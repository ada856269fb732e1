//! Export Tree use case
//!
//! Resolves output paths for a tree and delegates the write to a
//! [`TreeExporter`] adapter.

use crate::ports::tree_exporter::{ExportError, TreeExporter};
use pseudorag_domain::{ExportFormat, QuestionTree, file_stem};
use std::path::{Path, PathBuf};
use tracing::info;

/// Use case for writing a tree to a directory
pub struct ExportTreeUseCase<E: TreeExporter> {
    exporter: E,
}

impl<E: TreeExporter> ExportTreeUseCase<E> {
    pub fn new(exporter: E) -> Self {
        Self { exporter }
    }

    /// Target path for `tree` in `format` under `dir`: `{stem}.{ext}`.
    pub fn target_path(tree: &QuestionTree, format: ExportFormat, dir: &Path) -> PathBuf {
        dir.join(format!("{}.{}", file_stem(tree.topic()), format.extension()))
    }

    /// Export in a single format
    pub fn export(
        &self,
        tree: &QuestionTree,
        format: ExportFormat,
        dir: &Path,
    ) -> Result<PathBuf, ExportError> {
        let path = Self::target_path(tree, format, dir);
        let written = self.exporter.export(tree, format, &path)?;
        info!("Exported {} to {}", format, written.display());
        Ok(written)
    }

    /// Export in every format, stopping at the first failure
    pub fn export_all(&self, tree: &QuestionTree, dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
        ExportFormat::ALL
            .iter()
            .map(|format| self.export(tree, *format, dir))
            .collect()
    }
}
