//! Quick move use case

use crate::error::{EogtricksError, Result};
use crate::infrastructure::{Config, FileStore, LocalFiles};
use std::path::{Path, PathBuf};

/// Service moving images into the quick move target folder
pub struct QuickMoveService<F: FileStore = LocalFiles> {
    files: F,
    config: Config,
}

impl QuickMoveService<LocalFiles> {
    pub fn local(config: Config) -> Self {
        QuickMoveService {
            files: LocalFiles,
            config,
        }
    }
}

impl<F: FileStore> QuickMoveService<F> {
    pub fn new(files: F, config: Config) -> Self {
        QuickMoveService { files, config }
    }

    /// Explicit target if given, else the configured one.
    pub fn target(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.config.quick_move_target.clone())
            .ok_or(EogtricksError::NoQuickMoveTarget)
    }

    /// Move every file in `paths` into the target. Stops at the first
    /// failure; files moved before it stay moved.
    pub fn execute(&self, paths: &[PathBuf], explicit: Option<&Path>) -> Result<Vec<PathBuf>> {
        let target = self.target(explicit)?;

        let mut moved = Vec::with_capacity(paths.len());
        for path in paths {
            let new_path = self.files.move_into(path, &target)?;
            tracing::info!("Moved {} → {}", path.display(), new_path.display());
            moved.push(new_path);
        }
        Ok(moved)
    }
}
