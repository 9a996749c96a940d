//! Locating the inflection table inside a section
//!
//! A section may hold several tables: the inflection table for the target
//! language, tables for related words, usage boxes. A table is taken to be
//! the target language's inflection table when every link in its word-form
//! cells points into that language (or to a page not yet written).

use crate::core::dom::DocumentNode;
use crate::data::constants::{CELL_TAGS, ROW_GROUP_TAGS, ROW_TAG, TABLE_TAG};
use crate::utils::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};

use super::classify::CellClassifier;

/// How a table was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// A table whose links all point into the target language
    Matched,
    /// No table matched, the first table was used
    Fallback,
    /// The section has no table, the section itself is used
    NoTable,
}

/// The chosen node and why it was chosen
#[derive(Debug, Clone)]
pub struct TableSelection<N> {
    pub node: N,
    pub outcome: SelectionOutcome,
}

/// Picks the inflection table for a language out of a section
pub struct TableSelector<'a> {
    classifier: &'a CellClassifier<'a>,
}

impl<'a> TableSelector<'a> {
    pub fn new(classifier: &'a CellClassifier<'a>) -> Self {
        Self { classifier }
    }

    /// Select the table in `section`, recording fallbacks in `diagnostics`
    pub fn select<N: DocumentNode>(
        &self,
        section: &N,
        diagnostics: &mut Diagnostics,
    ) -> TableSelection<N> {
        let tables = section.find_all(&[TABLE_TAG], |_| true);

        if let Some(table) = tables.iter().find(|table| self.is_inflection_table(*table)) {
            log::debug!(
                "Selected inflection table for {} among {} table(s)",
                self.classifier.language(),
                tables.len()
            );
            return TableSelection {
                node: table.clone(),
                outcome: SelectionOutcome::Matched,
            };
        }

        match tables.into_iter().next() {
            Some(first) => {
                diagnostics.add(Diagnostic::new(
                    DiagnosticKind::LanguageFallback,
                    format!(
                        "no table links only to {} entries, using the first table",
                        self.classifier.language()
                    ),
                ));
                TableSelection {
                    node: first,
                    outcome: SelectionOutcome::Fallback,
                }
            }
            None => {
                diagnostics.add(Diagnostic::new(
                    DiagnosticKind::NoTable,
                    "section contains no table, reading the section itself",
                ));
                TableSelection {
                    node: section.clone(),
                    outcome: SelectionOutcome::NoTable,
                }
            }
        }
    }

    /// Whether `table` is an inflection table in the classifier's language
    ///
    /// Only the table's own cells are inspected. A table whose cells wrap
    /// another table is a layout wrapper and never qualifies; the nested
    /// table is considered on its own.
    pub fn is_inflection_table<N: DocumentNode>(&self, table: &N) -> bool {
        let cells: Vec<N> = table_rows(table)
            .iter()
            .flat_map(|row| row_cells(row))
            .collect();

        if cells.iter().any(|cell| cell.find_first(&[TABLE_TAG]).is_some()) {
            return false;
        }

        cells
            .iter()
            .filter(|cell| self.classifier.is_form_cell(*cell))
            .flat_map(|cell| self.classifier.link_targets(cell))
            .all(|href| {
                self.classifier.targets_language(&href) || self.classifier.is_broken_link(&href)
            })
    }
}

/// Rows belonging to `table` itself: direct `tr` children and those of its
/// row groups, never rows of nested tables
pub fn table_rows<N: DocumentNode>(table: &N) -> Vec<N> {
    let mut rows = Vec::new();

    for child in table.children() {
        let tag = child.tag_name();
        if tag == ROW_TAG {
            rows.push(child);
        } else if ROW_GROUP_TAGS.contains(&tag) {
            rows.extend(
                child
                    .children()
                    .into_iter()
                    .filter(|inner| inner.tag_name() == ROW_TAG),
            );
        }
    }

    rows
}

/// Direct `td`/`th` children of a row
pub fn row_cells<N: DocumentNode>(row: &N) -> Vec<N> {
    row.children()
        .into_iter()
        .filter(|cell| cell.is_any_of(CELL_TAGS))
        .collect()
}
