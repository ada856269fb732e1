//! Console output for trees, the taxonomy and batch totals.

pub mod console;
pub mod formatter;
