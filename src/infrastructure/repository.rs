//! Config directory discovery

use crate::error::{EogtricksError, Result};
use crate::infrastructure::config::{Config, CONFIG_DIR};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for settings
pub trait SettingsRepository {
    /// Get the directory holding .eogtricks
    fn root(&self) -> &Path;

    /// Load configuration from .eogtricks/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .eogtricks/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .eogtricks directory exists
    fn is_initialized(&self) -> bool;

    /// Create .eogtricks directory
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of SettingsRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the settings root by walking up from the current directory.
    /// EOGTRICKS_ROOT takes precedence when set.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("EOGTRICKS_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_config_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(EogtricksError::Config(format!(
                    "EOGTRICKS_ROOT is set to '{}' but no .eogtricks directory found. \
                    Run 'eogtricks init' in that directory or unset EOGTRICKS_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the settings root by walking up from a specific directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_config_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(EogtricksError::NotInitialized(start.to_path_buf()));
                }
            }
        }
    }

    /// Load the discovered config, or defaults when there is none.
    pub fn load_or_default() -> Result<Config> {
        match Self::discover() {
            Ok(repo) => repo.load_config(),
            Err(EogtricksError::NotInitialized(_)) => Ok(Config::new()),
            Err(e) => Err(e),
        }
    }

    fn has_config_dir(path: &Path) -> bool {
        path.join(CONFIG_DIR).is_dir()
    }
}

impl SettingsRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_config_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let config_dir = self.root.join(CONFIG_DIR);

        if config_dir.exists() {
            return Err(EogtricksError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&config_dir)?;
        Ok(())
    }
}
