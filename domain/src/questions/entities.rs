//! Question and QuestionTree entities

use crate::analysis::topic_domain::TopicDomain;
use crate::core::language::Language;
use crate::taxonomy::ArchetypeCode;
use serde::{Deserialize, Serialize};

/// Expected shape of an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerType {
    List,
    Number,
    #[default]
    Text,
    Boolean,
}

impl AnswerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerType::List => "list",
            AnswerType::Number => "number",
            AnswerType::Text => "text",
            AnswerType::Boolean => "boolean",
        }
    }

    /// Infer the answer type from question text.
    ///
    /// Substring rule with fixed precedence: "which / what kind" → list,
    /// quantity → number, manner ("how") → text, otherwise text.
    pub fn infer(text: &str) -> Self {
        let lower = text.to_lowercase();
        let has = |needles: &[&str]| needles.iter().any(|n| lower.contains(n));

        if has(&["какие", "какой", "which", "what kind"]) {
            AnswerType::List
        } else if has(&["сколько", "количество", "how many", "how much"]) {
            AnswerType::Number
        } else {
            // Manner questions ("как" / "how") and everything else
            AnswerType::Text
        }
    }
}

impl std::fmt::Display for AnswerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single probing question: one unit of downstream research work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// `{archetype_code}.{n}`, unique within a tree
    pub id: String,
    pub text: String,
    pub archetype_code: ArchetypeCode,
    /// Copied from the archetype's default priority
    pub priority: u8,
    pub keywords: Vec<String>,
    pub expected_answer_type: AnswerType,
    pub parent_id: Option<String>,
    /// Tree level; currently always 1
    pub depth: u32,
}

/// Summary of one expansion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeMetadata {
    pub total_questions: usize,
    pub depth: u32,
    pub domain: TopicDomain,
    pub language: Language,
    pub archetypes_used: usize,
}

/// Aggregate output of one expansion call (Entity)
///
/// Questions are ordered by archetype relevance rank, then template order.
/// The tree is immutable once assembled; exporters only read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionTree {
    topic: String,
    root_question: String,
    questions: Vec<Question>,
    metadata: TreeMetadata,
}

impl QuestionTree {
    pub fn new(
        topic: impl Into<String>,
        root_question: impl Into<String>,
        questions: Vec<Question>,
        metadata: TreeMetadata,
    ) -> Self {
        Self {
            topic: topic.into(),
            root_question: root_question.into(),
            questions,
            metadata,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn root_question(&self) -> &str {
        &self.root_question
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn metadata(&self) -> &TreeMetadata {
        &self.metadata
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions grouped by archetype, in canonical registry order.
    ///
    /// Only archetypes present in the tree appear.
    pub fn by_archetype(&self) -> Vec<(ArchetypeCode, Vec<&Question>)> {
        let mut groups: Vec<(ArchetypeCode, Vec<&Question>)> = Vec::new();
        for code in ArchetypeCode::ALL {
            let questions: Vec<&Question> = self
                .questions
                .iter()
                .filter(|q| q.archetype_code == code)
                .collect();
            if !questions.is_empty() {
                groups.push((code, questions));
            }
        }
        groups
    }
}
