//! Archetype entity and its 4-letter code

use super::axis::{Dynamics, Materiality, Scale, Structure};
use crate::core::error::DomainError;
use crate::core::language::Language;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Closed set of the 16 archetype codes (Value Object)
///
/// Declaration order is the canonical registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArchetypeCode {
    // Material / static
    Mseo,
    Msef,
    Msco,
    Mscf,
    // Material / dynamic
    Mdeo,
    Mdef,
    Mdco,
    Mdcf,
    // Abstract / static
    Aseo,
    Asef,
    Asco,
    Ascf,
    // Abstract / dynamic
    Adeo,
    Adef,
    Adco,
    Adcf,
}

impl ArchetypeCode {
    pub const ALL: [ArchetypeCode; 16] = [
        ArchetypeCode::Mseo,
        ArchetypeCode::Msef,
        ArchetypeCode::Msco,
        ArchetypeCode::Mscf,
        ArchetypeCode::Mdeo,
        ArchetypeCode::Mdef,
        ArchetypeCode::Mdco,
        ArchetypeCode::Mdcf,
        ArchetypeCode::Aseo,
        ArchetypeCode::Asef,
        ArchetypeCode::Asco,
        ArchetypeCode::Ascf,
        ArchetypeCode::Adeo,
        ArchetypeCode::Adef,
        ArchetypeCode::Adco,
        ArchetypeCode::Adcf,
    ];

    /// Get the 4-letter string form
    pub fn as_str(&self) -> &'static str {
        match self {
            ArchetypeCode::Mseo => "MSEO",
            ArchetypeCode::Msef => "MSEF",
            ArchetypeCode::Msco => "MSCO",
            ArchetypeCode::Mscf => "MSCF",
            ArchetypeCode::Mdeo => "MDEO",
            ArchetypeCode::Mdef => "MDEF",
            ArchetypeCode::Mdco => "MDCO",
            ArchetypeCode::Mdcf => "MDCF",
            ArchetypeCode::Aseo => "ASEO",
            ArchetypeCode::Asef => "ASEF",
            ArchetypeCode::Asco => "ASCO",
            ArchetypeCode::Ascf => "ASCF",
            ArchetypeCode::Adeo => "ADEO",
            ArchetypeCode::Adef => "ADEF",
            ArchetypeCode::Adco => "ADCO",
            ArchetypeCode::Adcf => "ADCF",
        }
    }

    /// Position in the canonical registry order
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for ArchetypeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ArchetypeCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArchetypeCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| DomainError::ArchetypeNotFound(s.to_string()))
    }
}

impl Serialize for ArchetypeCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ArchetypeCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Information archetype (immutable registry record)
#[derive(Debug, Clone, PartialEq)]
pub struct Archetype {
    pub code: ArchetypeCode,
    pub name_ru: &'static str,
    pub name_en: &'static str,
    pub description: &'static str,

    pub materiality: Materiality,
    pub dynamics: Dynamics,
    pub scale: Scale,
    pub structure: Structure,

    pub keywords_ru: &'static [&'static str],
    pub keywords_en: &'static [&'static str],

    /// Typical entities of this archetype
    pub examples: &'static [&'static str],

    /// 1 (rarely relevant) to 5 (almost always relevant)
    pub default_priority: u8,
}

impl Archetype {
    /// Code rebuilt from the axis letters
    pub fn axis_code(&self) -> String {
        [
            self.materiality.letter(),
            self.dynamics.letter(),
            self.scale.letter(),
            self.structure.letter(),
        ]
        .iter()
        .collect()
    }

    /// Keywords for the given language
    pub fn keywords(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::Ru => self.keywords_ru,
            Language::En => self.keywords_en,
        }
    }

    /// Display name for the given language
    pub fn name(&self, language: Language) -> &'static str {
        match language {
            Language::Ru => self.name_ru,
            Language::En => self.name_en,
        }
    }

    pub fn quadrant(&self) -> Quadrant {
        Quadrant::of(self.materiality, self.dynamics)
    }
}

/// Materiality + dynamics grouping of the taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    MaterialStatic,
    MaterialDynamic,
    AbstractStatic,
    AbstractDynamic,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::MaterialStatic,
        Quadrant::MaterialDynamic,
        Quadrant::AbstractStatic,
        Quadrant::AbstractDynamic,
    ];

    pub fn of(materiality: Materiality, dynamics: Dynamics) -> Self {
        match (materiality, dynamics) {
            (Materiality::Material, Dynamics::Static) => Quadrant::MaterialStatic,
            (Materiality::Material, Dynamics::Dynamic) => Quadrant::MaterialDynamic,
            (Materiality::Abstract, Dynamics::Static) => Quadrant::AbstractStatic,
            (Materiality::Abstract, Dynamics::Dynamic) => Quadrant::AbstractDynamic,
        }
    }

    /// Two-letter label ("MS", "MD", "AS", "AD")
    pub fn as_str(&self) -> &'static str {
        match self {
            Quadrant::MaterialStatic => "MS",
            Quadrant::MaterialDynamic => "MD",
            Quadrant::AbstractStatic => "AS",
            Quadrant::AbstractDynamic => "AD",
        }
    }

    pub fn name(&self, language: Language) -> &'static str {
        match (self, language) {
            (Quadrant::MaterialStatic, Language::Ru) => "Материальное-Статичное",
            (Quadrant::MaterialDynamic, Language::Ru) => "Материальное-Динамичное",
            (Quadrant::AbstractStatic, Language::Ru) => "Абстрактное-Статичное",
            (Quadrant::AbstractDynamic, Language::Ru) => "Абстрактное-Динамичное",
            (Quadrant::MaterialStatic, Language::En) => "Material-Static",
            (Quadrant::MaterialDynamic, Language::En) => "Material-Dynamic",
            (Quadrant::AbstractStatic, Language::En) => "Abstract-Static",
            (Quadrant::AbstractDynamic, Language::En) => "Abstract-Dynamic",
        }
    }
}

impl std::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
