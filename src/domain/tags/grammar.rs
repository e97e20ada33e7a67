//! Bracket tag grammar for filenames
//!
//! A tagged filename looks like `[leading tags] core [trailing tags].ext`.
//! The leading block is optional and only recognised at the very start of
//! the name; any other bracket block contributes trailing tags.
//!
//! # Examples
//!
//! ```
//! use eogtricks::domain::tags::TaggedName;
//!
//! let name = TaggedName::parse("[a b] photo [c].jpg");
//! assert_eq!(name.leading, vec!["a", "b"]);
//! assert_eq!(name.core, "photo");
//! assert_eq!(name.trailing, vec!["c"]);
//! assert_eq!(name.extension, ".jpg");
//! assert_eq!(name.to_filename(), "[a b] photo [c].jpg");
//! ```

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Regex for one bracket block plus the whitespace around it.
/// Only a single nesting level is recognised.
fn tag_block_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\s*(\[[^\[\]]*\])\s*").unwrap())
}

/// A filename split into its tag blocks, core and extension
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaggedName {
    /// Tags from a bracket block at the very start of the name
    pub leading: Vec<String>,

    /// Everything that is not a tag block or the extension
    pub core: String,

    /// Tags from every other bracket block, in encounter order
    pub trailing: Vec<String>,

    /// Extension including its dot, or empty
    pub extension: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    Block(&'a str),
}

impl TaggedName {
    /// Parse a filename. Never fails: malformed brackets stay in the core.
    pub fn parse(name: &str) -> Self {
        let (stem, extension) = split_extension(name);
        let tokens = tokenize(stem);

        if tokens.is_empty() {
            return TaggedName {
                core: stem.to_string(),
                extension: extension.to_string(),
                ..Default::default()
            };
        }

        let mut rest = tokens.as_slice();
        let mut leading = Vec::new();
        if let Some((Token::Block(block), tail)) = rest.split_first() {
            leading.extend(block_words(block));
            rest = tail;
        }

        let mut trailing = Vec::new();
        let mut core = String::new();
        for token in rest {
            match token {
                Token::Block(block) => trailing.extend(block_words(block)),
                Token::Text(text) => core.push_str(text),
            }
        }

        let (leading, trailing) = dedup_across(leading, trailing);

        TaggedName {
            leading,
            core,
            trailing,
            extension: extension.to_string(),
        }
    }

    /// Build the filename back from its parts.
    pub fn to_filename(&self) -> String {
        reassemble_filename(&self.leading, &self.core, &self.trailing, &self.extension)
    }

    /// The single-line edit string for this name's tags.
    pub fn edit_string(&self) -> String {
        super::render_edit_string(&self.leading, &self.trailing)
    }

    /// Replace both tag lists with the ones described by `edit`.
    pub fn with_edit_string(&self, edit: &str) -> Self {
        let (leading, trailing) = super::parse_edit_string(edit);
        TaggedName {
            leading,
            core: self.core.clone(),
            trailing,
            extension: self.extension.clone(),
        }
    }

    /// All tags, leading first
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.leading
            .iter()
            .chain(self.trailing.iter())
            .map(String::as_str)
    }
}

/// Parse a filename into `(leading, core, trailing, extension)`.
pub fn parse_filename(name: &str) -> (Vec<String>, String, Vec<String>, String) {
    let parsed = TaggedName::parse(name);
    (parsed.leading, parsed.core, parsed.trailing, parsed.extension)
}

/// Build a filename from its parts. Empty tag lists add no brackets.
///
/// Parts are separated by one space, so an empty core leaves no stray
/// space and the result parses back to the same name.
pub fn reassemble_filename(
    leading: &[String],
    core: &str,
    trailing: &[String],
    extension: &str,
) -> String {
    let mut parts = Vec::with_capacity(3);
    if !leading.is_empty() {
        parts.push(format!("[{}]", leading.join(" ")));
    }
    if !core.is_empty() {
        parts.push(core.to_string());
    }
    if !trailing.is_empty() {
        parts.push(format!("[{}]", trailing.join(" ")));
    }

    let mut name = parts.join(" ");
    name.push_str(extension);
    name
}

/// Split off the extension at the last dot.
///
/// Leading dots never start an extension, so `.hidden` has none.
pub fn split_extension(name: &str) -> (&str, &str) {
    let Some(dot) = name.rfind('.') else {
        return (name, "");
    };
    if name[..dot].chars().all(|c| c == '.') {
        return (name, "");
    }
    name.split_at(dot)
}

/// Deduplicate both lists together, first occurrence wins, leading first.
/// Empty strings are dropped.
pub fn dedup_across<L, T>(leading: L, trailing: T) -> (Vec<String>, Vec<String>)
where
    L: IntoIterator<Item = String>,
    T: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    let leading = leading
        .into_iter()
        .filter(|tag| !tag.is_empty() && seen.insert(tag.clone()))
        .collect();
    let trailing = trailing
        .into_iter()
        .filter(|tag| !tag.is_empty() && seen.insert(tag.clone()))
        .collect();
    (leading, trailing)
}

fn tokenize(stem: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut cursor = 0usize;

    for captures in tag_block_regex().captures_iter(stem) {
        let (Some(whole), Some(block)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        if whole.start() > cursor {
            tokens.push(Token::Text(&stem[cursor..whole.start()]));
        }
        tokens.push(Token::Block(block.as_str()));
        cursor = whole.end();
    }

    if cursor < stem.len() {
        tokens.push(Token::Text(&stem[cursor..]));
    }

    tokens
}

fn block_words(block: &str) -> impl Iterator<Item = String> + '_ {
    block
        .trim_matches(|c| c == '[' || c == ']')
        .split_whitespace()
        .map(str::to_string)
}
