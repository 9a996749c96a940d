//! Inflection table assembly

use indexmap::{IndexMap, IndexSet};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::utils::diagnostics::Diagnostics;

use super::classify::CellClassifier;
use super::grid::Grid;
use super::headers::HeaderResolver;

/// Word forms keyed by column path, then row path
///
/// Both levels and the form sets keep first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct InflectionTable(IndexMap<String, IndexMap<String, IndexSet<String>>>);

impl InflectionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add forms under `(column, row)`, skipping ones already present
    pub fn insert_forms<I>(&mut self, column: &str, row: &str, forms: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.0
            .entry(column.to_string())
            .or_default()
            .entry(row.to_string())
            .or_default()
            .extend(forms);
    }

    /// Forms stored under `(column, row)`
    pub fn get(&self, column: &str, row: &str) -> Option<&IndexSet<String>> {
        self.0.get(column).and_then(|rows| rows.get(row))
    }

    /// Row paths and forms under one column path
    pub fn column(&self, column: &str) -> Option<&IndexMap<String, IndexSet<String>>> {
        self.0.get(column)
    }

    pub fn column_paths(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, IndexMap<String, IndexSet<String>>> {
        self.0.iter()
    }

    /// Number of column paths
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of stored forms across all paths
    pub fn form_count(&self) -> usize {
        self.0
            .values()
            .flat_map(|rows| rows.values())
            .map(IndexSet::len)
            .sum()
    }
}

impl<'a> IntoIterator for &'a InflectionTable {
    type Item = (&'a String, &'a IndexMap<String, IndexSet<String>>);
    type IntoIter = indexmap::map::Iter<'a, String, IndexMap<String, IndexSet<String>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Every form in the table, in traversal order, without paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct SimpleValues(IndexSet<String>);

impl SimpleValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend<I: IntoIterator<Item = String>>(&mut self, forms: I) {
        self.0.extend(forms);
    }

    /// The first form seen, usually the lemma
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn contains(&self, form: &str) -> bool {
        self.0.contains(form)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

/// Result of one extraction
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ExtractOutput {
    pub table: InflectionTable,
    pub simple: SimpleValues,
    pub diagnostics: Diagnostics,
}

impl ExtractOutput {
    /// Whether the table is the inflection table of `word`
    ///
    /// The lemma is the first form in traversal order for the usual layouts.
    pub fn is_about(&self, word: &str) -> bool {
        self.simple.first() == Some(word)
    }
}

/// Collects forms from a grid's content cells
pub struct InflectionAssembler<'g, N> {
    grid: &'g Grid<N>,
    classifier: &'g CellClassifier<'g>,
}

impl<'g, N> InflectionAssembler<'g, N> {
    pub fn new(grid: &'g Grid<N>, classifier: &'g CellClassifier<'g>) -> Self {
        Self { grid, classifier }
    }

    /// Whether the grid has exactly one more row than columns; such tables
    /// may store forms without a row label
    fn accepts_empty_row_path(&self) -> bool {
        self.grid.num_rows() == self.grid.num_cols() + 1
    }

    /// Build the table and the flat form list
    pub fn assemble(&self) -> (InflectionTable, SimpleValues) {
        let resolver = HeaderResolver::new(self.grid, &self.classifier.options().placeholder);
        let mut table = InflectionTable::new();
        let mut simple = SimpleValues::new();

        for (coord, cell) in self.grid.iter().filter(|(_, cell)| cell.is_content()) {
            let forms = self.classifier.forms(&cell.text);
            if forms.is_empty() {
                continue;
            }
            simple.extend(forms.iter().cloned());

            let paths = resolver.resolve(coord);
            if paths.column.is_empty() {
                log::trace!("No column label for {:?} at {:?}", cell.text, coord);
                continue;
            }
            if paths.row.is_empty() && !self.accepts_empty_row_path() {
                log::trace!("No row label for {:?} at {:?}", cell.text, coord);
                continue;
            }

            table.insert_forms(&paths.column, &paths.row, forms);
        }

        log::debug!(
            "Assembled {} form(s) under {} column path(s)",
            table.form_count(),
            table.len()
        );
        (table, simple)
    }
}
