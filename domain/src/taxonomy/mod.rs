//! Archetype taxonomy.
//!
//! Sixteen "information-shape" archetypes spanned by four binary axes:
//!
//! | Axis        | Letters | Meaning                 |
//! |-------------|---------|-------------------------|
//! | materiality | M / A   | material / abstract     |
//! | dynamics    | S / D   | static / dynamic        |
//! | scale       | E / C   | elementary / complex    |
//! | structure   | O / F   | ordered / fluid         |
//!
//! The [`registry`] holds the fixed table; lookups never mutate it.

pub mod archetype;
pub mod axis;
pub mod registry;

pub use archetype::{Archetype, ArchetypeCode, Quadrant};
pub use axis::{Axis, Dynamics, Materiality, Scale, Structure};
