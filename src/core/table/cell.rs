//! Cell types for grid reconstruction

use crate::core::dom::DocumentNode;
use crate::data::constants::{COLSPAN_ATTR, HEADER_CELL_TAG, ROWSPAN_ATTR};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Grid coordinate: `(row, column)`, zero-indexed
pub type Coord = (usize, usize);

/// What a cell means to the inflection table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "lowercase"))]
pub enum CellKind {
    /// Row or column label
    Header,
    /// A word form
    Content,
    /// Blank or the "no such form" placeholder
    Empty,
}

/// How the markup presents a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRole {
    /// `<td>`
    Data,
    /// `<th>`
    Header,
}

impl CellRole {
    /// Role from the node's tag; anything that is not `th` reads as data
    pub fn of<N: DocumentNode>(node: &N) -> Self {
        if node.tag_name() == HEADER_CELL_TAG {
            CellRole::Header
        } else {
            CellRole::Data
        }
    }
}

/// A placed, classified cell
///
/// One `GridCell` exists per physical cell; a spanning cell is shared by
/// every coordinate it covers.
#[derive(Debug, Clone)]
pub struct GridCell<N> {
    /// Handle to the source node
    pub node: N,
    /// Markup role
    pub role: CellRole,
    /// Classification
    pub kind: CellKind,
    /// Cleaned cell text
    pub text: String,
    /// Top-left coordinate
    pub origin: Coord,
    /// Rows covered after clamping to the grid
    pub row_span: usize,
    /// Columns covered after clamping to the grid
    pub col_span: usize,
    /// `rowspan` as written (1 when absent or unparseable)
    pub declared_row_span: usize,
    /// `colspan` as written (1 when absent or unparseable)
    pub declared_col_span: usize,
}

impl<N> GridCell<N> {
    pub fn is_header(&self) -> bool {
        self.kind == CellKind::Header
    }

    pub fn is_content(&self) -> bool {
        self.kind == CellKind::Content
    }

    pub fn is_empty(&self) -> bool {
        self.kind == CellKind::Empty
    }

    /// Whether the cell covers `coord`
    pub fn covers(&self, coord: Coord) -> bool {
        let (row, col) = coord;
        row >= self.origin.0
            && row < self.origin.0 + self.row_span
            && col >= self.origin.1
            && col < self.origin.1 + self.col_span
    }
}

/// Declared `(rowspan, colspan)` of a cell node
pub fn cell_spans<N: DocumentNode>(node: &N) -> (usize, usize) {
    (
        parse_span(node.attr(ROWSPAN_ATTR)),
        parse_span(node.attr(COLSPAN_ATTR)),
    )
}

/// Parse a span attribute: leading digits of the value, 1 when absent,
/// unparseable or zero
pub fn parse_span(value: Option<&str>) -> usize {
    value
        .and_then(extract_num)
        .filter(|span| *span > 0)
        .unwrap_or(1)
}

#[inline]
fn extract_num(s: &str) -> Option<usize> {
    let digits: String = s
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}
