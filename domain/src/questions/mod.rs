//! Questions and question trees.
//!
//! - [`entities`] - `Question`, `QuestionTree`, `AnswerType`
//! - [`templates`] - fixed template lists per archetype
//! - [`generator`] - template instantiation

pub mod entities;
pub mod generator;
pub mod templates;
