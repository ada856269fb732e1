//! Progress reporting during expansion.

pub mod reporter;
