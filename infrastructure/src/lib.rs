//! Infrastructure layer for pseudorag
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod export;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileExpansionConfig, FileHistoryConfig, FileOutputConfig,
    FileOutputFormat,
};
pub use export::FileTreeExporter;
pub use logging::JsonlExpansionLogger;
