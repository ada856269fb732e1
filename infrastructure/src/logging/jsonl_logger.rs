//! JSONL history writer for expansion events.
//!
//! Each [`ExpansionEvent`] becomes one JSON line carrying the payload fields
//! plus `type` and `timestamp`. The file is opened in append mode so the
//! history accumulates across runs.

use pseudorag_application::ports::expansion_logger::{ExpansionEvent, ExpansionLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL expansion logger that appends one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlExpansionLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlExpansionLogger {
    /// Open (or create) the history file at `path` for appending.
    ///
    /// Creates parent directories as needed. Returns `None` if the file
    /// cannot be opened; history is then simply not recorded.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create history directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open history file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: ExpansionEvent, timestamp: String) -> Value {
        let mut map = match event.payload {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert(
            "type".to_string(),
            Value::String(event.event_type.to_string()),
        );
        map.insert("timestamp".to_string(), Value::String(timestamp));
        Value::Object(map)
    }
}

impl ExpansionLogger for JsonlExpansionLogger {
    fn log(&self, event: ExpansionEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let record = Self::record(event, timestamp);

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock()
            && let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush())
        {
            warn!("Failed to append to {}: {}", self.path.display(), e);
        }
    }
}

impl Drop for JsonlExpansionLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pseudorag_domain::{Language, QuestionTree, TopicDomain, TreeMetadata};
    use std::fs;

    fn tree(topic: &str, total: usize) -> QuestionTree {
        QuestionTree::new(
            topic,
            topic,
            vec![],
            TreeMetadata {
                total_questions: total,
                depth: 1,
                domain: TopicDomain::Urbanism,
                language: Language::Ru,
                archetypes_used: 3,
            },
        )
    }

    fn read_lines(path: &Path) -> Vec<Value> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_completed_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.jsonl");
        let logger = JsonlExpansionLogger::open(&path).unwrap();

        logger.log(ExpansionEvent::completed(&tree("Города Европы", 18), 0.4));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 1);
        let record = &lines[0];
        assert_eq!(record["type"], "expansion_completed");
        assert_eq!(record["query"], "Города Европы");
        assert_eq!(record["domain"], "урбанистика");
        assert_eq!(record["language"], "ru");
        assert_eq!(record["total_questions"], 18);
        assert_eq!(record["archetypes_used"], 3);

        let timestamp = record["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[test]
    fn test_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.jsonl");

        for topic in ["first", "second"] {
            let logger = JsonlExpansionLogger::open(&path).unwrap();
            logger.log(ExpansionEvent::completed(&tree(topic, 1), 0.3));
        }

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["query"], "first");
        assert_eq!(lines[1]["query"], "second");
    }

    #[test]
    fn test_non_object_payload_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.jsonl");
        let logger = JsonlExpansionLogger::open(&path).unwrap();

        logger.log(ExpansionEvent::new(
            "note",
            serde_json::json!("just a string"),
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines[0]["type"], "note");
        assert_eq!(lines[0]["data"], "just a string");
    }

    #[test]
    fn test_open_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        assert!(JsonlExpansionLogger::open(blocker.join("history.jsonl")).is_none());
    }
}
