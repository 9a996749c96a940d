//! # wikt-inflect
//!
//! Inflection table extraction for Wiktionary-style HTML, written in Rust.
//!
//! ## Features
//!
//! - **Span Resolution**: `rowspan`/`colspan` expanded into a dense grid, oversized spans clamped
//! - **Header Inference**: Row and column header paths from contiguous header runs
//! - **Language Aware**: Word forms recognised by links into the target language
//! - **Layout Tolerant**: Divider columns, collapsed duplicate layouts and ragged rows
//! - **Order Preserving**: Forms and paths keep document order, duplicates removed
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### From HTML
//!
//! ```rust
//! use wikt_inflect::{parse_inflections, simple_inflections};
//!
//! let html = r#"<table>
//!     <tr><th></th><th>singular</th><th>plural</th></tr>
//!     <tr><th>nominative</th><td>cat</td><td>cats</td></tr>
//! </table>"#;
//!
//! let table = parse_inflections(html, "English");
//! assert!(table.get("plural", "nominative").unwrap().contains("cats"));
//!
//! assert_eq!(simple_inflections(html, "English"), vec!["cat", "cats"]);
//! ```
//!
//! ### From a parsed tree
//!
//! ```rust
//! use wikt_inflect::{extract_inflections, ExtractOptions, HtmlDocument};
//!
//! let doc = HtmlDocument::parse_fragment(
//!     "<table><tr><th></th><th>present</th></tr><tr><th>ich</th><td>laufe</td></tr></table>",
//! );
//! let output = extract_inflections(&doc.root(), "German", &ExtractOptions::default());
//! assert!(output.is_about("laufe"));
//! assert!(output.diagnostics.is_empty());
//! ```

/// Core extraction modules
pub mod core;

/// Data layer - markup vocabulary and constants
pub mod data;

/// Feature modules - relevance, sections and export
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core extraction API
pub use crate::core::dom::{DocumentNode, HtmlDocument, NodeChild};
pub use crate::core::table;
pub use crate::core::table::{
    build_grid, extract_inflections, extract_table, ExtractOptions, ExtractOutput, Grid,
    InflectionTable, RowVariant, SimpleValues,
};

// Re-export data modules
pub use data::constants;

// Re-export feature modules
pub use features::export;
pub use features::relevance;
pub use features::sections;

// Re-export utilities
pub use utils::diagnostics;
pub use utils::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticLevel, Diagnostics};
pub use utils::error::{ExtractError, ExtractResult};

/// Extract the inflection table for `language` from HTML
///
/// # Arguments
/// * `html` - A page, a section or a single table
/// * `language` - Language name as used in entry links, e.g. `"German"`
///
/// # Returns
/// Forms keyed by column path, then row path
pub fn parse_inflections(html: &str, language: &str) -> InflectionTable {
    parse_inflections_with_options(html, language, &ExtractOptions::default()).table
}

/// Extract inflections from HTML with custom options, keeping diagnostics
pub fn parse_inflections_with_options(
    html: &str,
    language: &str,
    options: &ExtractOptions,
) -> ExtractOutput {
    let doc = HtmlDocument::parse_auto(html);
    extract_inflections(&doc.root(), language, options)
}

/// Every form in the table for `language`, in document order
pub fn simple_inflections(html: &str, language: &str) -> Vec<String> {
    parse_inflections_with_options(html, language, &ExtractOptions::default())
        .simple
        .to_vec()
}

/// The inflection table of `word`, or an empty table when the HTML holds
/// another word's table
pub fn parse_inflections_for_word(html: &str, language: &str, word: &str) -> InflectionTable {
    let doc = HtmlDocument::parse_auto(html);
    relevance::inflections_for_word(&doc.root(), language, word, &ExtractOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAT: &str = "<table>\
        <tr><th></th><th>singular</th><th>plural</th></tr>\
        <tr><th>nominative</th><td>cat</td><td>cats</td></tr>\
        <tr><th>genitive</th><td>cat's</td><td>cats'</td></tr>\
        </table>";

    #[test]
    fn test_parse_inflections_basic() {
        let table = parse_inflections(CAT, "English");
        assert_eq!(table.len(), 2);
        assert!(table.get("singular", "genitive").unwrap().contains("cat's"));
    }

    #[test]
    fn test_parse_full_page() {
        let page = format!("<!DOCTYPE html><html><body><h3>Declension</h3>{}</body></html>", CAT);
        let table = parse_inflections(&page, "English");
        assert_eq!(table.form_count(), 4);
    }

    #[test]
    fn test_simple_inflections() {
        assert_eq!(
            simple_inflections(CAT, "English"),
            vec!["cat", "cats", "cat's", "cats'"]
        );
    }

    #[test]
    fn test_parse_inflections_for_word() {
        assert!(!parse_inflections_for_word(CAT, "English", "cat").is_empty());
        assert!(parse_inflections_for_word(CAT, "English", "dog").is_empty());
    }

    #[test]
    fn test_empty_input() {
        let output = parse_inflections_with_options("", "English", &ExtractOptions::default());
        assert!(output.table.is_empty());
        assert!(output.simple.is_empty());
        assert!(output.diagnostics.contains(DiagnosticKind::NoTable));
    }

    #[test]
    fn test_strict_options() {
        let html = "<table>\
            <tr><th></th><th>present</th></tr>\
            <tr><th>du</th><td>läufst</td></tr>\
            <tr class=\"vsHide\"><th></th><th>present</th></tr>\
            <tr class=\"vsHide\"><th>ich</th><td>laufe</td></tr>\
            </table>";
        let collapsed = parse_inflections(html, "German");
        assert!(collapsed.get("present", "du").is_none());

        let output = parse_inflections_with_options(html, "German", &ExtractOptions::strict());
        assert!(output.table.get("present", "du").is_some());
    }
}
