//! Extraction diagnostics
//!
//! Inflection tables in the wild are ragged, over-spanned and sometimes
//! self-contradictory. The engine never rejects them; instead every
//! degradation it applies is recorded here so callers can tell a clean
//! extraction from a salvaged one:
//!
//! - Rows that end before the grid is full
//! - Spans clamped to the grid bounds
//! - Spanning cells colliding with an already placed cell
//! - Decorative divider columns removed from the grid
//! - Table selection falling back past the language filter
//!
//! ## Example
//!
//! ```rust
//! use wikt_inflect::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticLevel};
//!
//! let diag = Diagnostic::new(DiagnosticKind::RaggedRow, "row 2 ends after 1 of 3 columns")
//!     .with_location(2, 1);
//! assert_eq!(diag.level, DiagnosticLevel::Warning);
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "lowercase"))]
pub enum DiagnosticLevel {
    /// Informational note, output is unaffected
    Info,
    /// Output was reduced or reinterpreted
    Warning,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "info"),
            DiagnosticLevel::Warning => write!(f, "warning"),
        }
    }
}

/// What the engine had to work around
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "snake_case"))]
pub enum DiagnosticKind {
    /// A row ran out of cells before reaching the last column
    RaggedRow,
    /// A row or column span was larger than the remaining grid
    SpanClamped,
    /// A spanning cell overlapped a coordinate that was already occupied
    OverlappingSpan,
    /// A full-height, textless column was removed
    DividerColumn,
    /// No table matched the language, the first table was used
    LanguageFallback,
    /// The section had no table at all
    NoTable,
    /// The selected table had no rows
    EmptyTable,
}

impl DiagnosticKind {
    /// Default severity for this kind
    pub fn level(&self) -> DiagnosticLevel {
        match self {
            DiagnosticKind::DividerColumn => DiagnosticLevel::Info,
            _ => DiagnosticLevel::Warning,
        }
    }
}

/// A single diagnostic message
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Diagnostic {
    /// Severity level
    pub level: DiagnosticLevel,
    /// Category
    pub kind: DiagnosticKind,
    /// Human-readable message
    pub message: String,
    /// Grid row (0-indexed)
    pub row: Option<usize>,
    /// Grid column (0-indexed)
    pub column: Option<usize>,
}

impl Diagnostic {
    /// Create a new diagnostic with the kind's default level
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            level: kind.level(),
            kind,
            message: message.into(),
            row: None,
            column: None,
        }
    }

    /// Add grid location information
    pub fn with_location(mut self, row: usize, column: usize) -> Self {
        self.row = Some(row);
        self.column = Some(column);
        self
    }

    /// Add a row without a column
    pub fn with_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)?;

        match (self.row, self.column) {
            (Some(row), Some(col)) => write!(f, "\n  --> cell ({}, {})", row, col)?,
            (Some(row), None) => write!(f, "\n  --> row {}", row)?,
            _ => {}
        }

        Ok(())
    }
}

/// Diagnostics collected over one extraction
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Diagnostics {
    /// All diagnostics, in the order they were raised
    pub items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic
    pub fn add(&mut self, diag: Diagnostic) {
        log::debug!("{}", diag.message);
        self.items.push(diag);
    }

    /// Append every diagnostic from `other`
    pub fn extend(&mut self, other: Diagnostics) {
        self.items.extend(other.items);
    }

    /// Number of warning-level diagnostics
    pub fn warnings(&self) -> usize {
        self.count(DiagnosticLevel::Warning)
    }

    /// Number of info-level diagnostics
    pub fn infos(&self) -> usize {
        self.count(DiagnosticLevel::Info)
    }

    fn count(&self, level: DiagnosticLevel) -> usize {
        self.items.iter().filter(|d| d.level == level).count()
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        self.warnings() > 0
    }

    /// Whether any diagnostic of `kind` was raised
    pub fn contains(&self, kind: DiagnosticKind) -> bool {
        self.items.iter().any(|d| d.kind == kind)
    }

    /// Check if there are any issues at all
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    /// Summary string
    pub fn summary(&self) -> String {
        format!("{} warning(s), {} info(s)", self.warnings(), self.infos())
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Format diagnostics for terminal output
pub fn format_diagnostics(diagnostics: &Diagnostics, use_color: bool) -> String {
    let mut output = String::new();

    for diag in diagnostics {
        if use_color {
            let color = match diag.level {
                DiagnosticLevel::Warning => "\x1b[33m", // Yellow
                DiagnosticLevel::Info => "\x1b[34m",    // Blue
            };
            output.push_str(color);
            output.push_str(&format!("{}", diag));
            output.push_str("\x1b[0m\n\n");
        } else {
            output.push_str(&format!("{}\n\n", diag));
        }
    }

    if use_color {
        if diagnostics.has_warnings() {
            output.push_str("\x1b[33m");
        } else {
            output.push_str("\x1b[32m");
        }
    }

    output.push_str(&format!("Summary: {}", diagnostics.summary()));

    if use_color {
        output.push_str("\x1b[0m");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_levels() {
        assert_eq!(DiagnosticKind::DividerColumn.level(), DiagnosticLevel::Info);
        assert_eq!(DiagnosticKind::RaggedRow.level(), DiagnosticLevel::Warning);
    }

    #[test]
    fn test_display_with_location() {
        let diag = Diagnostic::new(DiagnosticKind::SpanClamped, "rowspan 5 clamped to 3")
            .with_location(0, 1);
        let msg = diag.to_string();
        assert!(msg.starts_with("warning: rowspan 5"));
        assert!(msg.contains("cell (0, 1)"));
    }

    #[test]
    fn test_counts() {
        let mut diags = Diagnostics::new();
        assert!(diags.is_empty());
        diags.add(Diagnostic::new(DiagnosticKind::DividerColumn, "divider"));
        diags.add(Diagnostic::new(DiagnosticKind::RaggedRow, "ragged").with_row(1));
        assert_eq!(diags.len(), 2);
        assert_eq!(diags.warnings(), 1);
        assert_eq!(diags.infos(), 1);
        assert!(diags.contains(DiagnosticKind::RaggedRow));
        assert!(!diags.contains(DiagnosticKind::NoTable));
    }

    #[test]
    fn test_format_plain() {
        let mut diags = Diagnostics::new();
        diags.add(Diagnostic::new(DiagnosticKind::NoTable, "no table in section"));
        let out = format_diagnostics(&diags, false);
        assert!(out.contains("warning: no table in section"));
        assert!(out.ends_with("Summary: 1 warning(s), 0 info(s)"));
        assert!(!out.contains("\x1b["));
    }
}
