//! Image files on the local file system

use crate::error::{EogtricksError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The operations plugins need on an image's file
pub trait FileStore {
    /// Name of the file as shown to the user
    fn display_name(&self, path: &Path) -> Result<String>;

    fn is_writable(&self, path: &Path) -> bool;

    /// Rename within the same directory. Returns the new path.
    fn set_display_name(&self, path: &Path, name: &str) -> Result<PathBuf>;

    /// Move into `dir`, keeping the name. Returns the new path.
    fn move_into(&self, path: &Path, dir: &Path) -> Result<PathBuf>;

    /// Files below `dir`, sorted. Hidden directories are skipped.
    fn list_files(&self, dir: &Path, recursive: bool) -> Result<Vec<PathBuf>>;
}

/// FileStore backed by std::fs
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFiles;

impl LocalFiles {
    fn require_file(path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(EogtricksError::FileNotFound(path.to_path_buf()));
        }
        Ok(())
    }

    fn require_writable(&self, path: &Path) -> Result<()> {
        if !self.is_writable(path) {
            return Err(EogtricksError::NotWritable(path.to_path_buf()));
        }
        Ok(())
    }
}

impl FileStore for LocalFiles {
    fn display_name(&self, path: &Path) -> Result<String> {
        Self::require_file(path)?;
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| EogtricksError::FileNotFound(path.to_path_buf()))
    }

    fn is_writable(&self, path: &Path) -> bool {
        fs::metadata(path)
            .map(|meta| !meta.permissions().readonly())
            .unwrap_or(false)
    }

    fn set_display_name(&self, path: &Path, name: &str) -> Result<PathBuf> {
        Self::require_file(path)?;
        self.require_writable(path)?;

        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(EogtricksError::Config(format!(
                "Invalid file name: {:?}",
                name
            )));
        }

        let target = path.with_file_name(name);
        if target == path {
            return Ok(target);
        }
        if target.exists() {
            return Err(EogtricksError::AlreadyExists(target));
        }

        fs::rename(path, &target)?;
        Ok(target)
    }

    fn move_into(&self, path: &Path, dir: &Path) -> Result<PathBuf> {
        Self::require_file(path)?;
        self.require_writable(path)?;

        if !dir.is_dir() {
            return Err(EogtricksError::Config(format!(
                "Not a directory: {}",
                dir.display()
            )));
        }

        let name = path
            .file_name()
            .ok_or_else(|| EogtricksError::FileNotFound(path.to_path_buf()))?;
        let target = dir.join(name);
        if target.exists() {
            return Err(EogtricksError::AlreadyExists(target));
        }

        match fs::rename(path, &target) {
            Ok(()) => Ok(target),
            Err(err) if err.kind() == io::ErrorKind::CrossesDevices => {
                tracing::debug!(%err, "rename crosses devices, copying instead");
                copy_then_remove(path, &target)?;
                Ok(target)
            }
            Err(err) => Err(EogtricksError::Io(err)),
        }
    }

    fn list_files(&self, dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(EogtricksError::FileNotFound(dir.to_path_buf()));
        }

        let max_depth = if recursive { usize::MAX } else { 1 };
        let walker = WalkDir::new(dir)
            .max_depth(max_depth)
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                entry
                    .file_name()
                    .to_str()
                    .map_or(true, |name| !name.starts_with('.'))
            });

        let mut files = Vec::new();
        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        files.sort();
        Ok(files)
    }
}

/// Copy `from` to `to` and delete `from`. On failure the copy is removed
/// again so only the source remains.
fn copy_then_remove(from: &Path, to: &Path) -> Result<()> {
    let result = fs::copy(from, to).and_then(|_| fs::remove_file(from));
    if let Err(err) = result {
        if let Err(cleanup_err) = fs::remove_file(to) {
            tracing::warn!(%cleanup_err, "could not remove {}", to.display());
        }
        return Err(EogtricksError::Io(err));
    }
    Ok(())
}
