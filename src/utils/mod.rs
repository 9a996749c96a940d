//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Diagnostics for non-fatal extraction issues
//! - Error types and result types
//! - Text cleanup and header label normalisation

pub mod diagnostics;
pub mod error;
pub mod text;

// Re-export commonly used items
pub use diagnostics::{format_diagnostics, Diagnostic, DiagnosticKind, DiagnosticLevel, Diagnostics};
pub use error::{ExtractError, ExtractResult};
pub use text::{clean_text, normalize_label, split_forms};
