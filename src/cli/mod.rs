//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{format_edit_outcome, format_plugin_list, format_tag_list, format_tagged_name};
