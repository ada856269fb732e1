//! File-backed [`TreeExporter`].
//!
//! Renders the tree first, then writes it to a hidden sibling temp file and
//! renames that over the target. A failed export never truncates or
//! half-writes an existing file, and the temp file is removed on failure.

use pseudorag_application::ports::tree_exporter::{ExportError, TreeExporter};
use pseudorag_domain::{ExportFormat, QuestionTree};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes exports to the local filesystem
#[derive(Debug, Clone, Default)]
pub struct FileTreeExporter {
    create_dirs: bool,
}

impl FileTreeExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create missing parent directories before writing
    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    fn temp_path(path: &Path) -> PathBuf {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        path.with_file_name(format!(".{}.tmp", name))
    }

    fn write_contents(path: &Path, contents: &str) -> std::io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
        writer.get_ref().sync_all()
    }
}

impl TreeExporter for FileTreeExporter {
    fn export(
        &self,
        tree: &QuestionTree,
        format: ExportFormat,
        path: &Path,
    ) -> Result<PathBuf, ExportError> {
        let contents = format.render(tree)?;

        if self.create_dirs
            && let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| ExportError::io(parent, e))?;
        }

        let temp = Self::temp_path(path);
        let result = Self::write_contents(&temp, &contents).and_then(|_| fs::rename(&temp, path));

        if let Err(e) = result {
            let _ = fs::remove_file(&temp);
            return Err(ExportError::io(path, e));
        }

        debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pseudorag_domain::{
        AnswerType, ArchetypeCode, Language, Question, TopicDomain, TreeMetadata,
    };
    use tempfile::TempDir;

    fn sample_tree() -> QuestionTree {
        let question = Question {
            id: "MDCF.1".to_string(),
            text: "Какие районы составляют Рим?".to_string(),
            archetype_code: ArchetypeCode::Mdcf,
            priority: 5,
            keywords: vec!["город".to_string()],
            expected_answer_type: AnswerType::List,
            parent_id: None,
            depth: 1,
        };
        QuestionTree::new(
            "Рим",
            "Рим",
            vec![question],
            TreeMetadata {
                total_questions: 1,
                depth: 1,
                domain: TopicDomain::General,
                language: Language::Ru,
                archetypes_used: 1,
            },
        )
    }

    #[test]
    fn test_writes_structured_export() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rim.json");

        let written = FileTreeExporter::new()
            .export(&sample_tree(), ExportFormat::Structured, &path)
            .unwrap();

        assert_eq!(written, path);
        let contents = fs::read_to_string(&path).unwrap();
        let parsed = pseudorag_domain::export::structured::from_json(&contents).unwrap();
        assert_eq!(parsed, sample_tree());
    }

    #[test]
    fn test_writes_outline_and_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rim.md");

        FileTreeExporter::new()
            .export(&sample_tree(), ExportFormat::Outline, &path)
            .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("# Questionnaire: Рим"));
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rim.md");
        fs::write(&path, "old").unwrap();

        FileTreeExporter::new()
            .export(&sample_tree(), ExportFormat::Outline, &path)
            .unwrap();

        assert_ne!(fs::read_to_string(&path).unwrap(), "old");
    }

    #[test]
    fn test_failure_leaves_existing_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rim.md");
        fs::write(&path, "previous export").unwrap();
        // Occupy the temp location so the write fails
        fs::create_dir(dir.path().join(".rim.md.tmp")).unwrap();

        let result = FileTreeExporter::new().export(&sample_tree(), ExportFormat::Outline, &path);

        match result {
            Err(ExportError::Io { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected Io error, got {:?}", other),
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous export");
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rim.md");
        // A non-empty directory at the target makes the rename fail
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "").unwrap();

        let result = FileTreeExporter::new().export(&sample_tree(), ExportFormat::Outline, &path);

        assert!(matches!(result, Err(ExportError::Io { .. })));
        assert!(!dir.path().join(".rim.md.tmp").exists());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("out").join("rim.json");

        let result = FileTreeExporter::new().export(&sample_tree(), ExportFormat::Structured, &path);
        assert!(matches!(result, Err(ExportError::Io { .. })));

        FileTreeExporter::new()
            .with_create_dirs(true)
            .export(&sample_tree(), ExportFormat::Structured, &path)
            .unwrap();
        assert!(path.exists());
    }
}
