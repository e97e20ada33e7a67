//! Filename tag system

pub mod edit;
pub mod grammar;

// Re-export main types
pub use edit::{accepts_entry_text, parse_edit_string, render_edit_string};
pub use grammar::{parse_filename, reassemble_filename, split_extension, TaggedName};
