//! Inflection Table Extraction
//!
//! Turns a table-shaped markup node into word forms keyed by their header
//! paths.
//!
//! This module handles the irregularities of real inflection tables:
//! - `rowspan` / `colspan` in any combination, including oversized spans
//! - Header-styled cells that are really word forms (and the reverse)
//! - Decorative full-height divider columns
//! - Tables encoding a full and a collapsed layout in one element
//! - Ragged rows
//!
//! # Architecture
//!
//! ```text
//! section -> TableSelector -> GridBuilder (+ CellClassifier) -> HeaderResolver -> InflectionAssembler
//! ```
//!
//! Each stage only reads the output of the previous one. Nothing here
//! fails: malformed input yields a smaller result plus [`Diagnostics`].
//!
//! # Example
//!
//! ```
//! use wikt_inflect::core::dom::HtmlDocument;
//! use wikt_inflect::core::table::{extract_inflections, ExtractOptions};
//!
//! let doc = HtmlDocument::parse_fragment(
//!     "<table><tr><th></th><th>singular</th></tr>\
//!      <tr><th>nominative</th><td>cat</td></tr></table>",
//! );
//! let output = extract_inflections(&doc.root(), "English", &ExtractOptions::default());
//! assert!(output.table.get("singular", "nominative").unwrap().contains("cat"));
//! ```

mod assemble;
mod cell;
mod classify;
mod grid;
mod headers;
mod options;
mod selector;

#[cfg(test)]
mod tests;

use crate::core::dom::DocumentNode;
use crate::utils::diagnostics::Diagnostics;

// Re-export public API
pub use assemble::{ExtractOutput, InflectionAssembler, InflectionTable, SimpleValues};
pub use cell::{cell_spans, parse_span, CellKind, CellRole, Coord, GridCell};
pub use classify::CellClassifier;
pub use grid::{Grid, GridBuilder};
pub use headers::{HeaderPaths, HeaderResolver};
pub use options::{ExtractOptions, RowVariant};
pub use selector::{row_cells, table_rows, SelectionOutcome, TableSelection, TableSelector};

/// Extract the inflection table for `language` from a section node
///
/// The section may hold several tables; the one whose word-form links all
/// point into `language` is used, falling back to the first table.
pub fn extract_inflections<N: DocumentNode>(
    section: &N,
    language: &str,
    options: &ExtractOptions,
) -> ExtractOutput {
    let classifier = CellClassifier::new(language, options);
    let mut diagnostics = Diagnostics::new();

    let selection = TableSelector::new(&classifier).select(section, &mut diagnostics);
    let output = assemble_table(&classifier, &selection.node, diagnostics);
    if output.table.is_empty() {
        log::debug!("No inflections found for {}", classifier.language());
    }
    output
}

/// Extract inflections from a node already known to be the table
pub fn extract_table<N: DocumentNode>(
    table: &N,
    language: &str,
    options: &ExtractOptions,
) -> ExtractOutput {
    let classifier = CellClassifier::new(language, options);
    assemble_table(&classifier, table, Diagnostics::new())
}

/// Build only the coordinate grid of a table
pub fn build_grid<N: DocumentNode>(
    table: &N,
    language: &str,
    options: &ExtractOptions,
) -> (Grid<N>, Diagnostics) {
    let classifier = CellClassifier::new(language, options);
    let mut diagnostics = Diagnostics::new();
    let grid = GridBuilder::new(&classifier).build(table, &mut diagnostics);
    (grid, diagnostics)
}

fn assemble_table<N: DocumentNode>(
    classifier: &CellClassifier<'_>,
    table: &N,
    mut diagnostics: Diagnostics,
) -> ExtractOutput {
    let grid = GridBuilder::new(classifier).build(table, &mut diagnostics);
    let (table, simple) = InflectionAssembler::new(&grid, classifier).assemble();

    ExtractOutput {
        table,
        simple,
        diagnostics,
    }
}
