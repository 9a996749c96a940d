//! Data layer - Static markup vocabulary and constants
//!
//! This module contains the static strings the extraction engine matches
//! against: tag and attribute names, Wiktionary markers and heading prefixes.

pub mod constants;

// Re-export commonly used items
pub use constants::{
    BROKEN_LINK_MARKER, CELL_TAGS, COLLAPSED_ROW_CLASS, DEFAULT_ANNOTATION_TAGS, EM_DASH,
    INFLECTION_HEADING_PREFIXES, PATH_SEPARATOR,
};
