//! Application layer for pseudorag
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExpansionParams;
pub use ports::{
    expansion_logger::{ExpansionEvent, ExpansionLogger, NoExpansionLogger},
    progress::{ExpansionProgressNotifier, NoProgress},
    tree_exporter::{ExportError, TreeExporter},
};
pub use use_cases::expand_topic::{ExpandTopicError, ExpandTopicInput, ExpandTopicUseCase};
pub use use_cases::export_tree::ExportTreeUseCase;
