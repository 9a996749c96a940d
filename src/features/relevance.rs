//! Word relevance filtering
//!
//! A page often embeds tables for several words: the entry's own paradigm,
//! plus tables of compounds, derived terms or alternative spellings. The
//! entry's own table is the one whose first form is the entry word.

use crate::core::dom::DocumentNode;
use crate::core::table::{extract_inflections, ExtractOptions, InflectionTable, SimpleValues};

/// The inflection table of `word`, or an empty table when the section's
/// table belongs to another word
pub fn inflections_for_word<N: DocumentNode>(
    section: &N,
    language: &str,
    word: &str,
    options: &ExtractOptions,
) -> InflectionTable {
    let output = extract_inflections(section, language, options);
    if output.is_about(word) {
        output.table
    } else {
        log::debug!(
            "Table is about {:?}, not {:?}",
            output.simple.first().unwrap_or_default(),
            word
        );
        InflectionTable::new()
    }
}

/// Every form of `word`, or nothing when the section's table belongs to
/// another word
pub fn simple_for_word<N: DocumentNode>(
    section: &N,
    language: &str,
    word: &str,
    options: &ExtractOptions,
) -> SimpleValues {
    let output = extract_inflections(section, language, options);
    if output.is_about(word) {
        output.simple
    } else {
        SimpleValues::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dom::HtmlDocument;

    const LAUFEN: &str = "<table>\
        <tr><th></th><th>present</th><th>past</th></tr>\
        <tr><th>ich</th><td>laufe</td><td>lief</td></tr>\
        </table>";

    #[test]
    fn test_matching_word_keeps_table() {
        let doc = HtmlDocument::parse_fragment(LAUFEN);
        let table = inflections_for_word(&doc.root(), "German", "laufe", &ExtractOptions::default());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_other_word_gives_empty_table() {
        let doc = HtmlDocument::parse_fragment(LAUFEN);
        let options = ExtractOptions::default();
        assert!(inflections_for_word(&doc.root(), "German", "lief", &options).is_empty());
        assert!(simple_for_word(&doc.root(), "German", "gehen", &options).is_empty());
    }

    #[test]
    fn test_simple_for_word() {
        let doc = HtmlDocument::parse_fragment(LAUFEN);
        let simple = simple_for_word(&doc.root(), "German", "laufe", &ExtractOptions::default());
        assert_eq!(simple.to_vec(), vec!["laufe", "lief"]);
    }
}
