//! Text cleanup for table cells and header labels
//!
//! Cell text arrives as raw runs joined by spaces. Before it can be
//! classified or split into word forms it is normalised:
//!
//! ```text
//! " Hund ,  Hunde "   -> "Hund, Hunde"
//! "( der )  Hund"     -> "(der) Hund"
//! ```
//!
//! Newlines survive cleanup because they separate alternative forms.

use lazy_static::lazy_static;
use regex::Regex;

use crate::data::constants::PATH_SEPARATOR;

lazy_static! {
    // Runs of horizontal whitespace (including no-break spaces)
    static ref SPACE_RUN: Regex = Regex::new(r"[ \t\u{a0}\u{202f}]+").unwrap();

    // Horizontal whitespace hugging a newline
    static ref NEWLINE_PADDING: Regex = Regex::new(r" *\n *").unwrap();

    // HTML character references that survived parsing, e.g. "&nbsp;"
    static ref CHAR_REFERENCE: Regex = Regex::new(r"&\S{3,10};").unwrap();

    // Boundaries between alternative forms within one cell
    static ref TOKEN_DELIMITER: Regex = Regex::new(r"[,/\n]").unwrap();

    // Any whitespace inside a header label
    static ref LABEL_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Collapse spacing, tidy punctuation and trim
pub fn clean_text(text: &str) -> String {
    let text = CHAR_REFERENCE.replace_all(text, " ");
    let text = SPACE_RUN.replace_all(&text, " ");
    let text = NEWLINE_PADDING.replace_all(&text, "\n");
    clean_punct(&text).trim().to_string()
}

/// Remove spaces before commas and inside parentheses
pub fn clean_punct(text: &str) -> String {
    text.replace(" ,", ",").replace("( ", "(").replace(" )", ")")
}

/// Split cleaned cell text into word forms on comma, slash and newline
/// boundaries, dropping empty pieces
pub fn split_forms(text: &str) -> Vec<String> {
    TOKEN_DELIMITER
        .split(text)
        .map(str::trim)
        .filter(|form| !form.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalise a header label for use as a path segment: lowercase,
/// whitespace runs replaced by a single underscore
pub fn normalize_label(label: &str) -> String {
    LABEL_WHITESPACE
        .replace_all(label.trim(), "_")
        .to_lowercase()
}

/// Join normalised labels into a header path, dropping placeholder labels
pub fn join_path<S: AsRef<str>>(labels: &[S], placeholder: &str) -> String {
    labels
        .iter()
        .map(|label| label.as_ref().trim())
        .filter(|label| !label.is_empty() && *label != placeholder)
        .map(normalize_label)
        .collect::<Vec<_>>()
        .join(PATH_SEPARATOR)
}

/// Whether `text` is blank or exactly the placeholder
pub fn is_blank_or_placeholder(text: &str, placeholder: &str) -> bool {
    let text = text.trim();
    text.is_empty() || text == placeholder
}

/// Language name as it appears in link fragments, e.g. `Old English` -> `Old_English`
pub fn link_language(language: &str) -> String {
    language.trim().replace(' ', "_")
}
