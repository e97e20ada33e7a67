//! Output formatting utilities

use crate::application::{EditOutcome, TagUsage};
use crate::domain::tags::TaggedName;
use crate::plugins::PluginInfo;

/// Format the parts of a tagged name for display
pub fn format_tagged_name(name: &str, tagged: &TaggedName) -> String {
    format!(
        "{}\n  tags:      {}\n  leading:   {}\n  core:      {}\n  trailing:  {}\n  extension: {}\n",
        name,
        tagged.edit_string(),
        tagged.leading.join(" "),
        tagged.core,
        tagged.trailing.join(" "),
        tagged.extension
    )
}

/// Format the result of an edit
pub fn format_edit_outcome(outcome: &EditOutcome) -> String {
    let original = outcome
        .original
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match &outcome.new_name {
        None => format!("Unchanged: {}", original),
        Some(new_name) if outcome.dry_run => format!("Would rename: {} → {}", original, new_name),
        Some(new_name) => format!("Renamed: {} → {}", original, new_name),
    }
}

/// Format a list of tags for display.
pub fn format_tag_list(tags: &[TagUsage]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let width = tags.iter().map(|t| t.tag.chars().count()).max().unwrap_or(0);
    let mut output = String::new();
    for usage in tags {
        output.push_str(&format!("{:<width$}  {}\n", usage.tag, usage.files, width = width));
    }

    output
}

/// Format the plugin catalog
pub fn format_plugin_list(plugins: &[PluginInfo]) -> String {
    let mut output = String::new();
    for plugin in plugins {
        output.push_str(&format!("{} - {}\n", plugin.name, plugin.description));
        for (action, accels) in &plugin.bindings {
            let keys = if accels.is_empty() {
                "(none)".to_string()
            } else {
                accels.join(", ")
            };
            output.push_str(&format!("    {}: {}\n", action, keys));
        }
    }
    output
}
