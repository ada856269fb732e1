//! Question generation: instantiate an archetype's templates for a topic

use super::entities::{AnswerType, Question};
use super::templates::{render, templates_for};
use crate::taxonomy::Archetype;

/// Generated questions always sit on the first tree level
pub const BASE_DEPTH: u32 = 1;

/// Turns archetype templates into concrete questions.
///
/// Holds a diagnostic counter of questions issued. Build a fresh generator
/// per expansion so the counter never leaks across calls.
#[derive(Debug, Default)]
pub struct QuestionGenerator {
    issued: usize,
}

impl QuestionGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Questions issued by this generator so far
    pub fn issued(&self) -> usize {
        self.issued
    }

    /// Generate the archetype's full question list for `topic`.
    ///
    /// Ids are `{code}.{n}` with `n` starting at 1 for each archetype.
    pub fn generate(&mut self, topic: &str, archetype: &Archetype) -> Vec<Question> {
        let keywords: Vec<String> = archetype
            .keywords_ru
            .iter()
            .map(|kw| kw.to_string())
            .collect();

        let questions: Vec<Question> = templates_for(archetype.code)
            .iter()
            .enumerate()
            .map(|(i, template)| {
                let text = render(template, topic);
                Question {
                    id: format!("{}.{}", archetype.code, i + 1),
                    expected_answer_type: AnswerType::infer(&text),
                    text,
                    archetype_code: archetype.code,
                    priority: archetype.default_priority,
                    keywords: keywords.clone(),
                    parent_id: None,
                    depth: BASE_DEPTH,
                }
            })
            .collect();

        self.issued += questions.len();
        questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{ArchetypeCode, registry};

    #[test]
    fn test_generate_ids_and_fields() {
        let mut generator = QuestionGenerator::new();
        let building = registry::get(ArchetypeCode::Msco);
        let questions = generator.generate("Города Европы", building);

        assert_eq!(questions.len(), 6);
        let ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["MSCO.1", "MSCO.2", "MSCO.3", "MSCO.4", "MSCO.5", "MSCO.6"]
        );

        let first = &questions[0];
        assert_eq!(first.text, "Какие сооружения и структуры составляют Города Европы?");
        assert_eq!(first.archetype_code, ArchetypeCode::Msco);
        assert_eq!(first.priority, 5);
        assert_eq!(first.expected_answer_type, AnswerType::List);
        assert_eq!(first.keywords[0], "здание");
        assert!(first.parent_id.is_none());
        assert!(questions.iter().all(|q| q.depth == BASE_DEPTH));

        // "Какая архитектура ..." falls through to text
        assert_eq!(questions[1].expected_answer_type, AnswerType::Text);
    }

    #[test]
    fn test_numbering_restarts_per_archetype() {
        let mut generator = QuestionGenerator::new();
        let a = generator.generate("X", registry::get(ArchetypeCode::Msef));
        let b = generator.generate("X", registry::get(ArchetypeCode::Mseo));
        assert_eq!(a[0].id, "MSEF.1");
        assert_eq!(b[0].id, "MSEO.1");
        assert_eq!(generator.issued(), a.len() + b.len());
    }

    #[test]
    fn test_fresh_generator_starts_at_zero() {
        let mut first = QuestionGenerator::new();
        first.generate("X", registry::get(ArchetypeCode::Adcf));
        let second = QuestionGenerator::new();
        assert_eq!(second.issued(), 0);
    }
}
