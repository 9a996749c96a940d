//! Header path inference
//!
//! A content cell's labels are the nearest unbroken run of header cells
//! before it: scanning left along its row for the row path, upward along
//! its column for the column path.
//!
//! ```text
//!        |  sg  |  pl          row path of "Hunde":    "nom"
//!   nom  | Hund | Hunde        column path of "Hunde": "pl"
//! ```
//!
//! Content cells met before the run starts are skipped; the first content
//! cell after it ends the scan. Empty cells and holes are transparent.

use std::collections::VecDeque;

use fxhash::FxHashSet;

use crate::utils::text::{join_path, normalize_label};

use super::cell::{Coord, GridCell};
use super::grid::Grid;

/// Row and column header paths of one coordinate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderPaths {
    /// Column labels joined top to bottom
    pub column: String,
    /// Row labels joined left to right
    pub row: String,
}

/// Resolves header paths over a built grid
pub struct HeaderResolver<'g, N> {
    grid: &'g Grid<N>,
    placeholder: &'g str,
}

impl<'g, N> HeaderResolver<'g, N> {
    pub fn new(grid: &'g Grid<N>, placeholder: &'g str) -> Self {
        Self { grid, placeholder }
    }

    /// Row labels of `coord`, left to right
    pub fn row_labels(&self, coord: Coord) -> Vec<String> {
        let (row, col) = coord;
        let num_rows = self.grid.num_rows();
        self.scan(
            (0..col).rev().map(|c| (row, c)),
            |cell| cell.declared_row_span <= num_rows,
        )
    }

    /// Column labels of `coord`, top to bottom
    ///
    /// A header spanning the full width titles the whole table and is not
    /// a column label.
    pub fn column_labels(&self, coord: Coord) -> Vec<String> {
        let (row, col) = coord;
        let num_cols = self.grid.num_cols();
        self.scan(
            (0..row).rev().map(|r| (r, col)),
            |cell| cell.declared_col_span < num_cols,
        )
    }

    /// Both paths of `coord`, serialised
    pub fn resolve(&self, coord: Coord) -> HeaderPaths {
        HeaderPaths {
            column: join_path(&self.column_labels(coord), self.placeholder),
            row: join_path(&self.row_labels(coord), self.placeholder),
        }
    }

    // Walk coordinates nearest-first, collecting the first contiguous run of qualifying headers
    fn scan<I, F>(&self, coords: I, qualifies: F) -> Vec<String>
    where
        I: Iterator<Item = Coord>,
        F: Fn(&GridCell<N>) -> bool,
    {
        let mut labels = VecDeque::new();
        let mut seen = FxHashSet::default();
        let mut found = false;

        for coord in coords {
            let Some(cell) = self.grid.get(coord) else {
                continue;
            };

            if cell.is_header() {
                if qualifies(cell)
                    && !cell.text.is_empty()
                    && seen.insert(normalize_label(&cell.text))
                {
                    found = true;
                    labels.push_front(cell.text.clone());
                }
            } else if cell.is_content() && found {
                break;
            }
        }

        labels.into()
    }
}
