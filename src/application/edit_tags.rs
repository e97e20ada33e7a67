//! Edit tags use case

use crate::error::Result;
use crate::infrastructure::{FileStore, LocalFiles};
use crate::plugins::{TagEdit, TagEditorPlugin};
use std::path::{Path, PathBuf};

/// Outcome of applying an edit string to one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    pub original: PathBuf,
    pub new_name: Option<String>,
    pub renamed_to: Option<PathBuf>,
    pub dry_run: bool,
}

impl EditOutcome {
    pub fn changed(&self) -> bool {
        self.new_name.is_some()
    }
}

/// Service for reading and rewriting filename tags
pub struct EditTagsService<F: FileStore = LocalFiles> {
    files: F,
}

impl EditTagsService<LocalFiles> {
    pub fn local() -> Self {
        EditTagsService { files: LocalFiles }
    }
}

impl<F: FileStore> EditTagsService<F> {
    pub fn new(files: F) -> Self {
        EditTagsService { files }
    }

    /// Start an edit session for the file at `path`.
    pub fn begin(&self, path: &Path) -> Result<TagEdit> {
        let name = self.files.display_name(path)?;
        Ok(TagEditorPlugin.begin(&name))
    }

    /// Apply `edit` to the file's tags and rename it if the name changes.
    pub fn apply(&self, path: &Path, edit: &str, dry_run: bool) -> Result<EditOutcome> {
        let session = self.begin(path)?;
        let new_name = session.finish(edit);

        let renamed_to = match &new_name {
            Some(name) if !dry_run => Some(self.files.set_display_name(path, name)?),
            Some(name) => Some(path.with_file_name(name)),
            None => None,
        };

        Ok(EditOutcome {
            original: path.to_path_buf(),
            new_name,
            renamed_to,
            dry_run,
        })
    }
}
