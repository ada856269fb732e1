//! Application-level configuration.
//!
//! - [`ExpansionParams`] - depth and relevance threshold of an expansion

pub mod expansion_params;

pub use expansion_params::{DEFAULT_DEPTH, DEFAULT_MIN_RELEVANCE, ExpansionParams};
