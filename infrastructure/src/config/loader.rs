//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["pseudorag.toml", ".pseudorag.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./pseudorag.toml` or `./.pseudorag.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/pseudorag/config.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::load_from(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path,
        )
    }

    /// Merge the given sources over the defaults. Missing optional files are skipped;
    /// a missing explicit file is an error.
    pub fn load_from(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project].into_iter().flatten() {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/pseudorag/config.toml if set,
    /// otherwise falls back to ~/.config/pseudorag/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("pseudorag").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./pseudorag.toml or ./.pseudorag.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.expansion.min_relevance, 0.3);
        assert_eq!(config.expansion.depth, 1);
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("pseudorag"));
    }

    #[test]
    fn test_no_sources_gives_defaults() {
        let config = ConfigLoader::load_from(None, None, None).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_later_sources_override_earlier() {
        let dir = TempDir::new().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("pseudorag.toml");
        let explicit = dir.path().join("explicit.toml");

        fs::write(
            &global,
            "[expansion]\nmin_relevance = 0.2\ndepth = 3\n[output]\ncolor = false\n",
        )
        .unwrap();
        fs::write(&project, "[expansion]\nmin_relevance = 0.4\n").unwrap();
        fs::write(&explicit, "[output]\nformat = \"json\"\n").unwrap();

        let config = ConfigLoader::load_from(
            Some(global.as_path()),
            Some(project.as_path()),
            Some(explicit.as_path()),
        )
        .unwrap();
        assert_eq!(config.expansion.min_relevance, 0.4);
        assert_eq!(config.expansion.depth, 3);
        assert!(!config.output.color);
        assert_eq!(config.output.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_missing_optional_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.toml");
        let config =
            ConfigLoader::load_from(Some(missing.as_path()), Some(missing.as_path()), None)
                .unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(ConfigLoader::load_from(None, None, Some(missing.as_path())).is_err());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[expansion]\ndepth = \"deep\"\n").unwrap();
        assert!(ConfigLoader::load_from(None, None, Some(path.as_path())).is_err());
    }
}
