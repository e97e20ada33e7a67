//! Initialize settings use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, SettingsRepository};
use std::fs;
use std::path::Path;

/// Create `.eogtricks/config.toml` at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::new())?;

    println!("Initialized eogtricks settings at {}", path.display());

    Ok(())
}
