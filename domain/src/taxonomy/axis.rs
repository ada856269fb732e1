//! The four binary axes that span the archetype space.
//!
//! Every archetype carries exactly one value per axis; the concatenation
//! of the four letters (materiality, dynamics, scale, structure) is its code.

use serde::{Deserialize, Serialize};

/// One of the four fixed dichotomies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// M/A: material or abstract
    Materiality,
    /// S/D: static or dynamic
    Dynamics,
    /// E/C: elementary or complex
    Scale,
    /// O/F: ordered or fluid
    Structure,
}

impl Axis {
    /// All axes in code order
    pub const ALL: [Axis; 4] = [
        Axis::Materiality,
        Axis::Dynamics,
        Axis::Scale,
        Axis::Structure,
    ];

    /// The two letters this axis can take
    pub fn letters(&self) -> [char; 2] {
        match self {
            Axis::Materiality => ['M', 'A'],
            Axis::Dynamics => ['S', 'D'],
            Axis::Scale => ['E', 'C'],
            Axis::Structure => ['O', 'F'],
        }
    }

    /// Lowercase axis name
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Materiality => "materiality",
            Axis::Dynamics => "dynamics",
            Axis::Scale => "scale",
            Axis::Structure => "structure",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Materiality {
    Material,
    Abstract,
}

impl Materiality {
    pub fn letter(&self) -> char {
        match self {
            Materiality::Material => 'M',
            Materiality::Abstract => 'A',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dynamics {
    Static,
    Dynamic,
}

impl Dynamics {
    pub fn letter(&self) -> char {
        match self {
            Dynamics::Static => 'S',
            Dynamics::Dynamic => 'D',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    Elementary,
    Complex,
}

impl Scale {
    pub fn letter(&self) -> char {
        match self {
            Scale::Elementary => 'E',
            Scale::Complex => 'C',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Structure {
    Ordered,
    Fluid,
}

impl Structure {
    pub fn letter(&self) -> char {
        match self {
            Structure::Ordered => 'O',
            Structure::Fluid => 'F',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_letters_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for axis in Axis::ALL {
            for letter in axis.letters() {
                assert!(seen.insert(letter), "letter {} reused", letter);
            }
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_value_letters_match_axis() {
        assert_eq!(
            Axis::Materiality.letters(),
            [Materiality::Material.letter(), Materiality::Abstract.letter()]
        );
        assert_eq!(
            Axis::Dynamics.letters(),
            [Dynamics::Static.letter(), Dynamics::Dynamic.letter()]
        );
        assert_eq!(
            Axis::Scale.letters(),
            [Scale::Elementary.letter(), Scale::Complex.letter()]
        );
        assert_eq!(
            Axis::Structure.letters(),
            [Structure::Ordered.letter(), Structure::Fluid.letter()]
        );
    }
}
