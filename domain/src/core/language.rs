//! Language value object

use serde::{Deserialize, Deserializer, Serialize};

/// Detected language of a topic query
///
/// Detection is binary: any Cyrillic letter means Russian, everything
/// else falls back to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ru,
    #[default]
    En,
}

impl Language {
    /// Get the language tag ("ru" / "en")
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = std::convert::Infallible;

    /// Unknown tags degrade to English
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "ru" => Language::Ru,
            _ => Language::En,
        })
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse::<Language>().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_unknown_tag_degrades_to_english() {
        let lang: Language = "de".parse().unwrap();
        assert_eq!(lang, Language::En);
        let lang: Language = "RU".parse().unwrap();
        assert_eq!(lang, Language::Ru);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&Language::Ru).unwrap();
        assert_eq!(json, "\"ru\"");
    }

    #[test]
    fn test_deserialize_unknown_tag_as_english() {
        let lang: Language = serde_json::from_str("\"de\"").unwrap();
        assert_eq!(lang, Language::En);
        let lang: Language = serde_json::from_str("\"ru\"").unwrap();
        assert_eq!(lang, Language::Ru);
    }
}
