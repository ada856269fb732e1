//! Coarse topical domain of a query

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Coarse topical bucket, used only to bias archetype scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TopicDomain {
    Urbanism,
    Biology,
    Technology,
    Geography,
    Culture,
    #[default]
    General,
}

impl TopicDomain {
    /// Ordered classification table: first domain with a matching trigger wins.
    const TRIGGERS: [(TopicDomain, &'static [&'static str]); 5] = [
        (
            TopicDomain::Urbanism,
            &["город", "горо", "столиц", "мегаполис"],
        ),
        (
            TopicDomain::Biology,
            &["животн", "растен", "организм", "вид"],
        ),
        (
            TopicDomain::Technology,
            &["машин", "транспорт", "устройств"],
        ),
        (
            TopicDomain::Geography,
            &["стран", "территор", "регион", "континент"],
        ),
        (
            TopicDomain::Culture,
            &["искусств", "культур", "традиц"],
        ),
    ];

    /// Classify a query by substring triggers on its case-folded form.
    pub fn classify(query: &str) -> Self {
        let folded = query.to_lowercase();
        Self::TRIGGERS
            .iter()
            .find(|(_, triggers)| triggers.iter().any(|t| folded.contains(t)))
            .map(|(domain, _)| *domain)
            .unwrap_or(TopicDomain::General)
    }

    /// Label used in tree metadata
    pub fn label(&self) -> &'static str {
        match self {
            TopicDomain::Urbanism => "урбанистика",
            TopicDomain::Biology => "биология",
            TopicDomain::Technology => "техника",
            TopicDomain::Geography => "география",
            TopicDomain::Culture => "культура",
            TopicDomain::General => "general",
        }
    }

    /// Parse a metadata label; unknown labels degrade to [`TopicDomain::General`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "урбанистика" => TopicDomain::Urbanism,
            "биология" => TopicDomain::Biology,
            "техника" => TopicDomain::Technology,
            "география" => TopicDomain::Geography,
            "культура" => TopicDomain::Culture,
            _ => TopicDomain::General,
        }
    }
}

impl std::fmt::Display for TopicDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for TopicDomain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for TopicDomain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(TopicDomain::from_label(&s))
    }
}
