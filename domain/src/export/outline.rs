//! Human-readable outline (Markdown) export of a question tree

use crate::questions::entities::QuestionTree;
use crate::taxonomy::registry;
use std::fmt::Write;

/// Render the tree as a Markdown outline.
///
/// One section per archetype present, in canonical registry order:
///
/// ```text
/// ## MSCO - Здание (6 questions)
///
/// **MSCO.1.** Какие сооружения и структуры составляют ...?
///   *Answer type: list*
/// ```
///
/// Questions are indented by two spaces per level below the first.
pub fn render(tree: &QuestionTree) -> String {
    let mut out = String::new();
    let language = tree.metadata().language;

    // Writing into a String cannot fail
    let _ = writeln!(out, "# Questionnaire: {}\n", tree.topic());
    let _ = writeln!(out, "**Root query:** {}\n", tree.root_question());
    let _ = writeln!(out, "**Total questions:** {}\n", tree.questions().len());
    out.push_str("---\n\n");

    for (code, questions) in tree.by_archetype() {
        let archetype = registry::get(code);
        let _ = writeln!(
            out,
            "## {} - {} ({} questions)\n",
            code,
            archetype.name(language),
            questions.len()
        );

        for question in questions {
            let indent = "  ".repeat(question.depth.saturating_sub(1) as usize);
            let _ = writeln!(out, "{}**{}.** {}", indent, question.id, question.text);
            let _ = writeln!(
                out,
                "{}  *Answer type: {}*\n",
                indent, question.expected_answer_type
            );
        }

        out.push('\n');
    }

    out
}
