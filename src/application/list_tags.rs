//! List tags use case

use crate::domain::tags::TaggedName;
use crate::error::Result;
use crate::infrastructure::{FileStore, LocalFiles};
use std::collections::BTreeMap;
use std::path::Path;

/// A tag and the number of files carrying it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagUsage {
    pub tag: String,
    pub files: usize,
}

fn collect_tags_from_name(name: &str, output: &mut BTreeMap<String, usize>) {
    for tag in TaggedName::parse(name).tags() {
        *output.entry(tag.to_string()).or_default() += 1;
    }
}

/// Service for listing all tags used in filenames.
pub struct ListTagsService<F: FileStore = LocalFiles> {
    files: F,
}

impl ListTagsService<LocalFiles> {
    pub fn local() -> Self {
        ListTagsService { files: LocalFiles }
    }
}

impl<F: FileStore> ListTagsService<F> {
    pub fn new(files: F) -> Self {
        Self { files }
    }

    /// Tags found in the names of files below `dir`, sorted by tag.
    pub fn execute(&self, dir: &Path, recursive: bool) -> Result<Vec<TagUsage>> {
        let mut counts = BTreeMap::new();
        for path in self.files.list_files(dir, recursive)? {
            let name = self.files.display_name(&path)?;
            collect_tags_from_name(&name, &mut counts);
        }

        Ok(counts
            .into_iter()
            .map(|(tag, files)| TagUsage { tag, files })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn collect_tags_counts_each_file_once() {
        let mut tags = BTreeMap::new();
        collect_tags_from_name("[a b] one [a c].png", &mut tags);
        collect_tags_from_name("two [c].png", &mut tags);
        assert_eq!(
            tags.into_iter().collect::<Vec<_>>(),
            vec![
                ("a".to_string(), 1),
                ("b".to_string(), 1),
                ("c".to_string(), 2)
            ]
        );
    }

    #[test]
    fn execute_walks_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("[cat] one.png"), b"x").unwrap();
        fs::write(temp.path().join("two [cat dog].png"), b"x").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub").join("three [bird].png"), b"x").unwrap();

        let flat = ListTagsService::local().execute(temp.path(), false).unwrap();
        assert_eq!(
            flat,
            vec![
                TagUsage {
                    tag: "cat".to_string(),
                    files: 2
                },
                TagUsage {
                    tag: "dog".to_string(),
                    files: 1
                },
            ]
        );

        let deep = ListTagsService::local().execute(temp.path(), true).unwrap();
        assert_eq!(deep.len(), 3);
        assert_eq!(deep[0].tag, "bird");
    }
}
