//! Span-resolving grid builder
//!
//! Expands a table's rows into a dense coordinate grid. A spanning cell is
//! written to every coordinate of its rectangle, so later lookups never
//! need to know about spans.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::core::dom::DocumentNode;
use crate::utils::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};

use super::cell::{cell_spans, CellRole, Coord, GridCell};
use super::classify::CellClassifier;
use super::options::RowVariant;
use super::selector::{row_cells, table_rows};

/// Coordinate grid of classified cells
///
/// Holes (coordinates no cell reached) are simply absent.
#[derive(Debug, Clone)]
pub struct Grid<N> {
    /// Placed cells, in placement order
    cells: Vec<GridCell<N>>,
    /// Coordinate -> index into `cells`
    slots: BTreeMap<Coord, usize>,
    num_rows: usize,
    num_cols: usize,
}

impl<N> Grid<N> {
    fn new(num_rows: usize, num_cols: usize) -> Self {
        Grid {
            cells: Vec::new(),
            slots: BTreeMap::new(),
            num_rows,
            num_cols,
        }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Cell occupying `coord`
    pub fn get(&self, coord: Coord) -> Option<&GridCell<N>> {
        self.slots.get(&coord).map(|&idx| &self.cells[idx])
    }

    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.slots.contains_key(&coord)
    }

    /// Placed cells, one entry per physical cell
    pub fn cells(&self) -> &[GridCell<N>] {
        &self.cells
    }

    /// Every occupied coordinate with its cell, row-major
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &GridCell<N>)> + '_ {
        self.slots
            .iter()
            .map(move |(&coord, &idx)| (coord, &self.cells[idx]))
    }

    /// Number of occupied coordinates
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Place `cell` on every free coordinate of its rectangle
    ///
    /// Returns the coordinates that were already taken. A cell that finds
    /// no free coordinate is not stored.
    fn place(&mut self, cell: GridCell<N>) -> Vec<Coord> {
        let (top, left) = cell.origin;
        let mut free = Vec::new();
        let mut taken = Vec::new();

        for row in top..top + cell.row_span {
            for col in left..left + cell.col_span {
                if self.slots.contains_key(&(row, col)) {
                    taken.push((row, col));
                } else {
                    free.push((row, col));
                }
            }
        }

        if !free.is_empty() {
            let idx = self.cells.len();
            self.cells.push(cell);
            for coord in free {
                self.slots.insert(coord, idx);
            }
        }

        taken
    }

    /// Drop coordinates beyond the final width, after divider columns
    /// narrowed the grid under cells placed earlier
    fn truncate_columns(&mut self) {
        let width = self.num_cols;
        if self.slots.keys().all(|&(_, col)| col < width) {
            return;
        }

        let placed = std::mem::take(&mut self.cells);
        self.slots.clear();
        for mut cell in placed {
            if cell.origin.1 >= width {
                continue;
            }
            cell.col_span = cell.col_span.min(width - cell.origin.1);
            self.place(cell);
        }
    }

    /// Render the grid for inspection
    ///
    /// Each line is one row, prefixed with its zero-padded index; header
    /// cells are shown in bold when `use_color` is set.
    pub fn render(&self, use_color: bool) -> String {
        let mut widths = vec![1usize; self.num_cols];
        for ((_, col), cell) in self.iter() {
            if let Some(width) = widths.get_mut(col) {
                *width = (*width).max(display_text(cell).chars().count());
            }
        }

        let index_width = self.num_rows.saturating_sub(1).to_string().len();
        let mut output = String::new();

        let _ = write!(output, "{:index_width$} ", "");
        for (col, width) in widths.iter().enumerate() {
            let _ = write!(output, "| {:<width$} ", col, width = *width);
        }
        output.push('\n');

        for row in 0..self.num_rows {
            let _ = write!(output, "{:0index_width$} ", row);
            for (col, width) in widths.iter().enumerate() {
                let (text, bold) = match self.get((row, col)) {
                    Some(cell) => (display_text(cell), use_color && cell.is_header()),
                    None => (String::new(), false),
                };
                if bold {
                    let _ = write!(output, "| \x1b[1m{:<width$}\x1b[0m ", text, width = *width);
                } else {
                    let _ = write!(output, "| {:<width$} ", text, width = *width);
                }
            }
            output.push('\n');
        }

        output
    }
}

fn display_text<N>(cell: &GridCell<N>) -> String {
    cell.text.replace('\n', " / ")
}

/// Builds a [`Grid`] from a table node
pub struct GridBuilder<'a> {
    classifier: &'a CellClassifier<'a>,
}

impl<'a> GridBuilder<'a> {
    pub fn new(classifier: &'a CellClassifier<'a>) -> Self {
        Self { classifier }
    }

    /// Rows the grid is built from
    ///
    /// Tables that carry both a full and a collapsed layout mark the
    /// collapsed rows with a class; when any row has it only those rows are
    /// used, unless every row was requested.
    pub fn select_rows<N: DocumentNode>(&self, table: &N) -> Vec<N> {
        let rows = table_rows(table);
        let options = self.classifier.options();

        if options.row_variant == RowVariant::AllRows {
            return rows;
        }

        let class = options.collapsed_row_class.as_str();
        if rows.iter().any(|row| row.has_class(class)) {
            let collapsed: Vec<N> = rows.into_iter().filter(|row| row.has_class(class)).collect();
            log::debug!("Using {} collapsed row(s)", collapsed.len());
            collapsed
        } else {
            rows
        }
    }

    /// Declared width of a row: the sum of its cells' column spans
    pub fn count_cols<N: DocumentNode>(row: &N) -> usize {
        row_cells(row).iter().map(|cell| cell_spans(cell).1).sum()
    }

    /// Expand `table` into a grid
    pub fn build<N: DocumentNode>(&self, table: &N, diagnostics: &mut Diagnostics) -> Grid<N> {
        let rows = self.select_rows(table);

        let Some(first) = rows.first() else {
            diagnostics.add(Diagnostic::new(
                DiagnosticKind::EmptyTable,
                "table has no rows",
            ));
            return Grid::new(0, 0);
        };

        let mut state = GridState {
            grid: Grid::new(rows.len(), Self::count_cols(first)),
            diagnostics,
        };

        for (row_idx, row) in rows.iter().enumerate() {
            state.process_row(self.classifier, row_idx, &row_cells(row));
        }

        state.grid.truncate_columns();
        log::debug!(
            "Built {}x{} grid with {} cell(s)",
            state.grid.num_rows,
            state.grid.num_cols,
            state.grid.cells.len()
        );
        state.grid
    }
}

// Mutable state while rows are expanded
struct GridState<'d, N> {
    grid: Grid<N>,
    diagnostics: &'d mut Diagnostics,
}

impl<'d, N: DocumentNode> GridState<'d, N> {
    fn process_row(&mut self, classifier: &CellClassifier<'_>, row: usize, cells: &[N]) {
        let num_rows = self.grid.num_rows;
        let mut input_idx = 0;
        let mut current_col = 0;

        loop {
            // Skip columns covered by cells spanning down from earlier rows
            while current_col < self.grid.num_cols && self.grid.is_occupied((row, current_col)) {
                current_col += 1;
            }

            if current_col >= self.grid.num_cols {
                if input_idx < cells.len() {
                    log::trace!(
                        "Row {} has {} cell(s) past the last column",
                        row,
                        cells.len() - input_idx
                    );
                }
                break;
            }

            let Some(node) = cells.get(input_idx) else {
                self.diagnostics.add(
                    Diagnostic::new(
                        DiagnosticKind::RaggedRow,
                        format!(
                            "row {} ends after {} of {} columns",
                            row, current_col, self.grid.num_cols
                        ),
                    )
                    .with_location(row, current_col),
                );
                break;
            };
            input_idx += 1;

            let (declared_rows, declared_cols) = cell_spans(node);

            // A textless cell spanning the whole height is a decorative divider
            if declared_rows >= num_rows && node.flat_text().trim().is_empty() {
                let width = declared_cols.min(self.grid.num_cols - current_col);
                self.grid.num_cols -= width;
                self.diagnostics.add(
                    Diagnostic::new(
                        DiagnosticKind::DividerColumn,
                        format!("removed {} divider column(s) at column {}", width, current_col),
                    )
                    .with_location(row, current_col),
                );
                continue;
            }

            let row_span = declared_rows.min(num_rows - row);
            let col_span = declared_cols.min(self.grid.num_cols - current_col);
            if row_span < declared_rows || col_span < declared_cols {
                self.diagnostics.add(
                    Diagnostic::new(
                        DiagnosticKind::SpanClamped,
                        format!(
                            "span {}x{} clamped to {}x{}",
                            declared_rows, declared_cols, row_span, col_span
                        ),
                    )
                    .with_location(row, current_col),
                );
            }

            let (text, kind) = classifier.read(node);
            let taken = self.grid.place(GridCell {
                node: node.clone(),
                role: CellRole::of(node),
                kind,
                text,
                origin: (row, current_col),
                row_span,
                col_span,
                declared_row_span: declared_rows,
                declared_col_span: declared_cols,
            });

            if let Some(&(r, c)) = taken.first() {
                self.diagnostics.add(
                    Diagnostic::new(
                        DiagnosticKind::OverlappingSpan,
                        format!(
                            "cell at ({}, {}) overlaps {} occupied coordinate(s), first at ({}, {})",
                            row,
                            current_col,
                            taken.len(),
                            r,
                            c
                        ),
                    )
                    .with_location(row, current_col),
                );
            }

            current_col += col_span;
        }
    }
}
