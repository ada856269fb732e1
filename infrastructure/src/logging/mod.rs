//! Logging infrastructure: structured expansion history.
//!
//! Provides [`JsonlExpansionLogger`], a JSONL file writer that implements
//! the [`ExpansionLogger`](pseudorag_application::ExpansionLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlExpansionLogger;
