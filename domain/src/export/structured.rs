//! Structured (JSON) export of a question tree
//!
//! Field names are stable: `topic`, `root_question`, `questions[]`
//! (`id`, `text`, `archetype_code`, `priority`, `keywords`,
//! `expected_answer_type`, `parent_id`, `depth`) and `metadata`
//! (`total_questions`, `depth`, `domain`, `language`, `archetypes_used`).

use crate::questions::entities::QuestionTree;

/// Render the tree as pretty-printed UTF-8 JSON.
pub fn to_json(tree: &QuestionTree) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tree)
}

/// Convert the tree into a generic JSON value.
pub fn to_value(tree: &QuestionTree) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(tree)
}

/// Parse a structured export back into a tree.
pub fn from_json(json: &str) -> Result<QuestionTree, serde_json::Error> {
    serde_json::from_str(json)
}
