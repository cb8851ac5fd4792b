//! Title ↔ filename mapping
//!
//! A note's filename is a pure function of its title. There is no stored
//! index — read/delete/tag re-derive the filename on every call.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Any run of characters outside [a-z0-9] collapses to one hyphen
    static ref NON_ALNUM_RE: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Turn a title like "Project Ideas" into "project-ideas.md".
///
/// Total over all inputs: an empty or all-symbol title maps to ".md".
/// Titles that slugify identically address the same file (last write wins).
pub fn slugify(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    let hyphenated = NON_ALNUM_RE.replace_all(&lowered, "-");
    format!("{}.md", hyphenated.trim_matches('-'))
}

/// Reconstruct a readable title from a filename: "project-ideas.md" →
/// "Project Ideas". Not an inverse of `slugify` — casing and punctuation
/// from the original title are gone.
pub fn display_title(filename: &str) -> String {
    let stem = filename.strip_suffix(".md").unwrap_or(filename);
    stem.replace('-', " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
