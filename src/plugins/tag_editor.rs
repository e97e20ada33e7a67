//! Edit bracketed filename tags through a single-line entry

use super::{detailed_name, ActionRegistration, PluginInfo, WindowPlugin};
use crate::domain::accels::bindings;
use crate::domain::tags::{accepts_entry_text, TaggedName};
use crate::error::Result;
use crate::host::WindowHost;

pub const ACTION_NAME: &str = "edit-filename-tags";
const ACCELS: &[&str] = &["numbersign"];

#[derive(Debug, Clone, Copy, Default)]
pub struct TagEditorPlugin;

impl TagEditorPlugin {
    /// Start editing the tags of a file currently called `original`.
    pub fn begin(&self, original: &str) -> TagEdit {
        let tagged = TaggedName::parse(original);
        let edit_string = tagged.edit_string();
        TagEdit {
            original: original.to_string(),
            tagged,
            edit_string,
        }
    }
}

impl WindowPlugin for TagEditorPlugin {
    type Activation = ActionRegistration;

    fn info(&self) -> PluginInfo {
        PluginInfo {
            name: "bracket-tags",
            description: "Edit [bracketed tags] in image filenames".to_string(),
            bindings: bindings(&[(detailed_name(ACTION_NAME).as_str(), ACCELS)]),
        }
    }

    fn activate(&self, window: &mut dyn WindowHost) -> Result<ActionRegistration> {
        tracing::debug!("Activated. Adding action win.{}", ACTION_NAME);
        Ok(ActionRegistration::register(window, &[(ACTION_NAME, ACCELS)]))
    }

    fn deactivate(&self, window: &mut dyn WindowHost, activation: ActionRegistration) {
        tracing::debug!("Deactivated. Removing action win.{}", ACTION_NAME);
        activation.unregister(window);
    }
}

/// One tag editing session for a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEdit {
    original: String,
    tagged: TaggedName,
    edit_string: String,
}

impl TagEdit {
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn tagged(&self) -> &TaggedName {
        &self.tagged
    }

    /// Initial text for the entry
    pub fn edit_string(&self) -> &str {
        &self.edit_string
    }

    /// Whether the entry should let `text` be typed in
    pub fn accepts(&self, text: &str) -> bool {
        accepts_entry_text(text)
    }

    /// The new filename for the edited text, or `None` if nothing changes.
    pub fn finish(&self, edited: &str) -> Option<String> {
        let renamed = self.tagged.with_edit_string(edited).to_filename();
        if renamed == self.original {
            return None;
        }
        tracing::debug!("Rename {:?} → {:?}", self.original, renamed);
        Some(renamed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{AccelHost, MemoryWindow};

    #[test]
    fn activation_binds_numbersign() {
        let mut window = MemoryWindow::default();
        let activation = TagEditorPlugin.activate(&mut window).unwrap();
        assert!(window.has_action(ACTION_NAME));
        assert_eq!(
            window.app.accels_for_action("win.edit-filename-tags"),
            vec!["numbersign"]
        );

        TagEditorPlugin.deactivate(&mut window, activation);
        assert!(!window.has_action(ACTION_NAME));
    }

    #[test]
    fn begin_renders_current_tags() {
        let edit = TagEditorPlugin.begin("[a b] photo [c].jpg");
        assert_eq!(edit.edit_string(), "a b / c");
        assert_eq!(edit.tagged().core, "photo");
        assert_eq!(edit.original(), "[a b] photo [c].jpg");
    }

    #[test]
    fn finish_builds_new_name() {
        let edit = TagEditorPlugin.begin("photo.jpg");
        assert_eq!(edit.edit_string(), "");
        assert_eq!(
            edit.finish("Best / Beach Sun").as_deref(),
            Some("[best] photo [beach sun].jpg")
        );
    }

    #[test]
    fn finish_unchanged_is_none() {
        let edit = TagEditorPlugin.begin("[a b] photo [c].jpg");
        assert_eq!(edit.finish("a b / c"), None);
        assert_eq!(edit.finish("  A B/C "), None);
    }

    #[test]
    fn finish_can_remove_all_tags() {
        let edit = TagEditorPlugin.begin("[a] photo [c].jpg");
        assert_eq!(edit.finish("").as_deref(), Some("photo.jpg"));
    }

    #[test]
    fn retagging_tag_only_name_is_stable() {
        let edit = TagEditorPlugin.begin("[a].png");
        let renamed = edit.finish("b").unwrap();
        assert_eq!(renamed, "[b].png");

        let again = TagEditorPlugin.begin(&renamed);
        assert_eq!(again.tagged().to_filename(), renamed);
        assert_eq!(again.finish(again.edit_string()), None);
    }

    #[test]
    fn entry_rejects_brackets() {
        let edit = TagEditorPlugin.begin("photo.jpg");
        assert!(edit.accepts("sunset"));
        assert!(!edit.accepts("]"));
    }
}
