//! Configuration for fieldpicker

use eyre::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use taskpane::TaskpaneProps;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Startup settings of the taskpane (strategy, sort, tab)
    #[serde(default)]
    pub taskpane: TaskpaneProps,
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::read(config_path);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("fieldpicker").join("config.yml")),
            Some(PathBuf::from("fieldpicker.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                return Self::read(path);
            }
        }

        debug!("no config file found, using defaults");
        Ok(Config::default())
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .wrap_err_with(|| format!("Invalid config file {}", path.display()))?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{Category, SortDirection};
    use std::io::Write;
    use taskpane::InsertionStrategy;

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "taskpane:\n  strategy: hidden-region\n  initial-sort: descending"
        )
        .unwrap();

        let config = Config::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(config.taskpane.strategy, InsertionStrategy::HiddenRegion);
        assert_eq!(config.taskpane.initial_sort, SortDirection::Descending);
        assert_eq!(config.taskpane.initial_category, Category::General);
    }

    #[test]
    fn test_empty_sections_use_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yml");
        assert!(Config::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_invalid_strategy_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "taskpane:\n  strategy: ooxml").unwrap();
        assert!(Config::load(Some(&file.path().to_path_buf())).is_err());
    }
}
