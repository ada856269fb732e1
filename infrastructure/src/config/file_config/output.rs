//! Output configuration from TOML (`[output]` section)

use pseudorag_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Console output format named in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileOutputFormat {
    #[default]
    Outline,
    Json,
    Summary,
}

impl FileOutputFormat {
    pub const VALID_VALUES: [&'static str; 3] = ["outline", "json", "summary"];
}

impl FromStr for FileOutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "outline" | "md" | "markdown" => Ok(FileOutputFormat::Outline),
            "json" => Ok(FileOutputFormat::Json),
            "summary" => Ok(FileOutputFormat::Summary),
            _ => Err(()),
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format name
    pub format: Option<String>,
    /// Enable colored terminal output
    pub color: bool,
    /// Directory to export every tree into
    pub directory: Option<PathBuf>,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            directory: None,
        }
    }
}

impl FileOutputConfig {
    /// Parse the format string, falling back to outline on unknown values.
    pub fn parse_format(&self) -> (Option<FileOutputFormat>, Vec<ConfigIssue>) {
        let Some(format) = &self.format else {
            return (None, vec![]);
        };

        match format.parse::<FileOutputFormat>() {
            Ok(parsed) => (Some(parsed), vec![]),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "output.format".to_string(),
                        value: format.clone(),
                        valid_values: FileOutputFormat::VALID_VALUES
                            .iter()
                            .map(|v| v.to_string())
                            .collect(),
                    },
                    format!(
                        "output.format: unknown value '{}', falling back to 'outline'",
                        format
                    ),
                );
                (Some(FileOutputFormat::Outline), vec![issue])
            }
        }
    }
}
