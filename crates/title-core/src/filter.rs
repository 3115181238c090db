//! Turns a model's free-text answer into a short list of clean titles.

use once_cell::sync::Lazy;
use regex::Regex;

/// Upper bound on titles returned to the caller.
pub const MAX_TITLES: usize = 5;
/// Fewer surviving lines than this fails the request.
pub const MIN_TITLES: usize = 3;
/// Lines longer than this (in characters) are dropped.
pub const MAX_TITLE_CHARS: usize = 50;

static NUMBERED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[.)、]").expect("Failed to compile numbering regex"));

fn is_title_line(line: &str) -> bool {
    !line.is_empty()
        && !line.starts_with('#')
        && !NUMBERED.is_match(line)
        && !line.starts_with('-')
        && !line.starts_with('*')
        && line.chars().count() <= MAX_TITLE_CHARS
}

/// Keeps at most [`MAX_TITLES`] trimmed lines, dropping headings, numbered or
/// bulleted lines, blanks and over-long lines. Order is preserved.
pub fn extract_titles(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| is_title_line(line))
        .take(MAX_TITLES)
        .map(str::to_string)
        .collect()
}
