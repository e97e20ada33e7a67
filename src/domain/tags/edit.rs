//! Single-line edit representation of a name's tags
//!
//! `leading words / trailing words`. Only the first `/` separates the two
//! lists; a string without any `/` describes trailing tags only.

use super::grammar::dedup_across;

/// Characters that can never appear in a stored tag.
pub const FORBIDDEN_TAG_CHARS: [char; 5] = ['[', ']', ';', ',', '/'];

/// Characters the interactive entry refuses to insert.
pub const FORBIDDEN_ENTRY_CHARS: [char; 4] = ['[', ']', ';', ','];

pub const FORBIDDEN_CHAR_REPLACEMENT: &str = "_";

/// Render tag lists as an edit string.
pub fn render_edit_string(leading: &[String], trailing: &[String]) -> String {
    let (leading, trailing) = dedup_across(leading.to_vec(), trailing.to_vec());

    match (leading.is_empty(), trailing.is_empty()) {
        (false, false) => format!("{} / {}", leading.join(" "), trailing.join(" ")),
        (true, false) => trailing.join(" "),
        (false, true) => format!("{} /", leading.join(" ")),
        (true, true) => String::new(),
    }
}

/// Parse an edit string back into `(leading, trailing)`.
///
/// Tags are lower-cased and forbidden characters become `_`. Extra slashes
/// fold into the trailing side instead of discarding anything.
pub fn parse_edit_string(edit: &str) -> (Vec<String>, Vec<String>) {
    let segments: Vec<&str> = edit.split('/').collect();

    let (leading, trailing) = match segments.split_first() {
        Some((only, [])) => (Vec::new(), segment_words(only)),
        Some((first, rest)) => (segment_words(first), segment_words(&rest.join(" "))),
        None => (Vec::new(), Vec::new()),
    };

    dedup_across(leading, trailing)
}

/// Whether the entry should accept `text` as an insertion.
pub fn accepts_entry_text(text: &str) -> bool {
    !text.contains(FORBIDDEN_ENTRY_CHARS)
}

fn segment_words(segment: &str) -> Vec<String> {
    segment
        .to_lowercase()
        .split_whitespace()
        .map(|word| word.replace(FORBIDDEN_TAG_CHARS, FORBIDDEN_CHAR_REPLACEMENT))
        .collect()
}
