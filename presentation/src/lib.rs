//! Presentation layer for pseudorag
//!
//! This crate contains CLI definitions, output formatters
//! and the console progress reporter.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::OutputConfig;
pub use output::console::{ConsoleFormatter, ExpansionSummary};
pub use output::formatter::OutputFormatter;
pub use progress::reporter::ConsoleProgress;
