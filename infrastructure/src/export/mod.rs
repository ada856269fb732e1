//! Filesystem adapter for the tree exporter port.

mod file_exporter;

pub use file_exporter::FileTreeExporter;
