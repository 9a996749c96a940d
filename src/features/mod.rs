//! Feature modules - Working with extracted tables
//!
//! This module contains functionality layered on top of the extraction core:
//! - Word relevance filtering (is this table about the entry word?)
//! - Inflection section headings
//! - Export to flat records, text, JSON, YAML and CSV

pub mod export;
pub mod relevance;
pub mod sections;

// Re-export commonly used types
pub use export::{flatten, render_simple, render_text, ExportFormat, InflectionRow};
pub use relevance::{inflections_for_word, simple_for_word};
pub use sections::{extract_section, is_inflection_heading, normalize_section_heading};
