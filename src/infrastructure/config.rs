//! Configuration management

use crate::domain::pager::PAGE_SCROLL_FRACTION;
use crate::error::{EogtricksError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR: &str = ".eogtricks";
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Folder the quick move shortcut sends images to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_move_target: Option<PathBuf>,

    /// Part of a page moved by one page command
    #[serde(default = "default_page_scroll_fraction")]
    pub page_scroll_fraction: f64,

    pub created: DateTime<Utc>,
}

fn default_page_scroll_fraction() -> f64 {
    PAGE_SCROLL_FRACTION
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            quick_move_target: None,
            page_scroll_fraction: PAGE_SCROLL_FRACTION,
            created: Utc::now(),
        }
    }

    /// Load config from .eogtricks/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                EogtricksError::NotInitialized(path.to_path_buf())
            } else {
                EogtricksError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .eogtricks/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let config_dir = path.join(CONFIG_DIR);
        let config_path = config_dir.join(CONFIG_FILE);

        // Ensure .eogtricks directory exists
        if !config_dir.exists() {
            fs::create_dir(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Parse and check a page scroll fraction
    pub fn parse_page_scroll_fraction(value: &str) -> Result<f64> {
        let fraction: f64 = value.trim().parse().map_err(|_| {
            EogtricksError::Config(format!("Invalid page_scroll_fraction: {}", value))
        })?;
        check_fraction(fraction)?;
        Ok(fraction)
    }

    fn validate(&self) -> Result<()> {
        check_fraction(self.page_scroll_fraction)
    }
}

fn check_fraction(fraction: f64) -> Result<()> {
    if fraction > 0.0 && fraction <= 1.0 {
        Ok(())
    } else {
        Err(EogtricksError::Config(format!(
            "Invalid page_scroll_fraction: {}. Expected a value in (0, 1]",
            fraction
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new();
        assert_eq!(config.quick_move_target, None);
        assert_eq!(config.page_scroll_fraction, 0.9);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new();
        config.quick_move_target = Some(PathBuf::from("/home/floe/sorted"));

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(".eogtricks/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            EogtricksError::NotInitialized(_) => {}
            other => panic!("Expected NotInitialized error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_optional_keys_use_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".eogtricks")).unwrap();
        fs::write(
            temp.path().join(".eogtricks/config.toml"),
            "created = \"2025-01-17T10:00:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.quick_move_target, None);
        assert_eq!(loaded.page_scroll_fraction, 0.9);
    }

    #[test]
    fn test_malformed_config_is_toml_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".eogtricks")).unwrap();
        fs::write(
            temp.path().join(".eogtricks/config.toml"),
            "page_scroll_fraction = \"half\"\n",
        )
        .unwrap();

        assert!(matches!(
            Config::load_from_dir(temp.path()),
            Err(EogtricksError::TomlDeserialize(_))
        ));
    }

    #[test]
    fn test_out_of_range_fraction_rejected() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".eogtricks")).unwrap();
        fs::write(
            temp.path().join(".eogtricks/config.toml"),
            "page_scroll_fraction = 2.5\ncreated = \"2025-01-17T10:00:00Z\"\n",
        )
        .unwrap();

        assert!(matches!(
            Config::load_from_dir(temp.path()),
            Err(EogtricksError::Config(_))
        ));
    }

    #[test]
    fn test_parse_page_scroll_fraction() {
        assert_eq!(Config::parse_page_scroll_fraction("0.5").unwrap(), 0.5);
        assert!(Config::parse_page_scroll_fraction("0").is_err());
        assert!(Config::parse_page_scroll_fraction("lots").is_err());
    }
}
