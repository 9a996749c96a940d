//! Markup vocabulary and fixed strings used by table extraction
//!
//! This module collects the tag names, attribute names and marker strings
//! the extraction engine matches against:
//! - Table structure tags (table, row groups, rows, cells)
//! - Cell content tags that change classification (links, paragraphs, superscripts)
//! - Wiktionary conventions (collapsed rows, broken links, placeholders)

use lazy_static::lazy_static;
use std::collections::HashSet;

// ============================================================================
// Table Structure
// ============================================================================

pub const TABLE_TAG: &str = "table";
pub const ROW_TAG: &str = "tr";
pub const DATA_CELL_TAG: &str = "td";
pub const HEADER_CELL_TAG: &str = "th";

/// Both cell roles, in the order they are searched for
pub const CELL_TAGS: &[&str] = &[DATA_CELL_TAG, HEADER_CELL_TAG];

/// Containers that may sit between a table and its rows
pub const ROW_GROUP_TAGS: &[&str] = &["thead", "tbody", "tfoot"];

pub const ROWSPAN_ATTR: &str = "rowspan";
pub const COLSPAN_ATTR: &str = "colspan";
pub const CLASS_ATTR: &str = "class";
pub const HREF_ATTR: &str = "href";

// ============================================================================
// Cell Content
// ============================================================================

pub const LINK_TAG: &str = "a";
pub const PARAGRAPH_TAG: &str = "p";
pub const SUPERSCRIPT_TAG: &str = "sup";
pub const SPAN_TAG: &str = "span";

/// Subtrees dropped from cell text by default (footnote marks, nested lists, abbreviations)
pub const DEFAULT_ANNOTATION_TAGS: &[&str] = &[SUPERSCRIPT_TAG, "dl", "ul", "abbr"];

// ============================================================================
// Wiktionary Conventions
// ============================================================================

/// Class marking the rows of a collapsible table's default (collapsed) layout
pub const COLLAPSED_ROW_CLASS: &str = "vsHide";

/// Query suffix MediaWiki appends to links whose target page does not exist yet
pub const BROKEN_LINK_MARKER: &str = "redlink=1";

/// Placeholder for a form that does not exist
pub const EM_DASH: &str = "—";

/// Separator between labels of a header path
pub const PATH_SEPARATOR: &str = " > ";

/// Canonical name for every inflection-style section heading
pub const INFLECTIONS_HEADING: &str = "Inflections";

lazy_static! {
    /// Heading prefixes that introduce an inflection table section
    pub static ref INFLECTION_HEADING_PREFIXES: HashSet<&'static str> = {
        let mut s = HashSet::new();
        s.insert("Declen");
        s.insert("Conjug");
        s.insert("Inflec");
        s
    };
}

/// Length of the prefixes in [`INFLECTION_HEADING_PREFIXES`]
pub const HEADING_PREFIX_LEN: usize = 6;
