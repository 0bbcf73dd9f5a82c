//! Text helpers shared by the selector and the puzzle view

use std::collections::HashSet;

/// Marker stored in place of a plot or field that could not be read.
pub const MISSING_TEXT: &str = "N/A";

/// Keep only alphanumeric and whitespace characters, lower-cased.
///
/// Used for matching only; the raw token is what gets displayed.
pub fn clean_term(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Build the set of clean words in a title.
pub fn title_words(title: &str) -> HashSet<String> {
    clean_term(title)
        .split_whitespace()
        .map(|s| s.to_string())
        .collect()
}

/// Normalize scraped text before it is stored in a record.
///
/// Trims, folds newlines into spaces and maps missing or blank text to
/// [`MISSING_TEXT`].
pub fn normalize_text(text: Option<&str>) -> String {
    match text.map(str::trim) {
        Some(t) if !t.is_empty() => t.replace('\n', " "),
        _ => MISSING_TEXT.to_string(),
    }
}

/// Project text onto `\w` characters (letters, digits, underscore), lower-cased.
pub(crate) fn word_chars(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}
