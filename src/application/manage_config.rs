//! Config management use case

use crate::error::{EogtricksError, Result};
use crate::infrastructure::{Config, FileSystemRepository, SettingsRepository};
use crate::plugins::quick_move::choose_target;
use std::path::Path;

pub const VALID_KEYS: &str = "quick_move_target, page_scroll_fraction, created";

/// Service for managing settings
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "quick_move_target" => Ok(config
                .quick_move_target
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "page_scroll_fraction" => Ok(config.page_scroll_fraction.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(EogtricksError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value. An empty quick_move_target clears it.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "quick_move_target" => {
                if value.is_empty() {
                    config.quick_move_target = None;
                } else {
                    choose_target(&mut config, Path::new(value))?;
                }
            }
            "page_scroll_fraction" => {
                config.page_scroll_fraction = Config::parse_page_scroll_fraction(value)?;
            }
            "created" => {
                return Err(EogtricksError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(EogtricksError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: quick_move_target, page_scroll_fraction",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new()).unwrap();
        ConfigService::new(repo)
    }

    #[test]
    fn set_and_get_quick_move_target() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        let keep = temp.path().join("keep");
        std::fs::create_dir(&keep).unwrap();
        let keep_str = keep.display().to_string();

        assert_eq!(service.get("quick_move_target").unwrap(), "");
        service.set("quick_move_target", &keep_str).unwrap();
        assert_eq!(service.get("quick_move_target").unwrap(), keep_str);
        service.set("quick_move_target", "").unwrap();
        assert_eq!(service.list().unwrap().quick_move_target, None);
    }

    #[test]
    fn quick_move_target_must_exist() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service
            .set("quick_move_target", &temp.path().join("gone").display().to_string())
            .is_err());
        assert_eq!(service.list().unwrap().quick_move_target, None);
    }

    #[test]
    fn set_page_scroll_fraction_validates() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("page_scroll_fraction", "0.75").unwrap();
        assert_eq!(service.get("page_scroll_fraction").unwrap(), "0.75");
        assert!(service.set("page_scroll_fraction", "3").is_err());
    }

    #[test]
    fn created_is_read_only() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert!(service.set("created", "now").is_err());
    }

    #[test]
    fn unknown_key_rejected() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert!(service.get("colour").is_err());
        assert!(service.set("colour", "red").is_err());
    }
}
