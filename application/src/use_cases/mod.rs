//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod expand_topic;
pub mod export_tree;
