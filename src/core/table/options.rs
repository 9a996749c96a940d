//! Extraction options

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::data::constants::{
    BROKEN_LINK_MARKER, COLLAPSED_ROW_CLASS, DEFAULT_ANNOTATION_TAGS, EM_DASH,
};

/// Which rows of a table the grid is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum RowVariant {
    /// Use the rows marked as the collapsed layout when the table has any,
    /// otherwise every row
    #[default]
    PreferCollapsed,
    /// Always use every row
    AllRows,
}

/// Options controlling how a table is read
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ExtractOptions {
    /// Row selection for tables that encode more than one layout
    /// Default: PreferCollapsed
    pub row_variant: RowVariant,

    /// Class marking rows of the collapsed layout
    /// Default: "vsHide"
    pub collapsed_row_class: String,

    /// Link suffix marking a link to a page that does not exist yet
    /// Default: "redlink=1"
    pub broken_link_marker: String,

    /// Text standing for "no such form"
    /// Default: "—"
    pub placeholder: String,

    /// Tags whose subtrees are dropped from cell text (footnotes, notes, abbreviations)
    /// Default: ["sup", "dl", "ul", "abbr"]
    pub annotation_tags: Vec<String>,

    /// Read a cell's forms from its target-language `<span>`s, one per line,
    /// when it has any
    /// Default: true
    pub split_spans: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            row_variant: RowVariant::PreferCollapsed,
            collapsed_row_class: COLLAPSED_ROW_CLASS.to_string(),
            broken_link_marker: BROKEN_LINK_MARKER.to_string(),
            placeholder: EM_DASH.to_string(),
            annotation_tags: DEFAULT_ANNOTATION_TAGS
                .iter()
                .map(|t| t.to_string())
                .collect(),
            split_spans: true,
        }
    }
}

impl ExtractOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Options tuned for Wiktionary inflection tables (the defaults)
    pub fn wiktionary() -> Self {
        Self::default()
    }

    /// Read the table exactly as laid out: every row, whole-cell text
    pub fn strict() -> Self {
        Self {
            row_variant: RowVariant::AllRows,
            split_spans: false,
            ..Self::default()
        }
    }

    /// Builder-style row variant override
    pub fn with_row_variant(mut self, row_variant: RowVariant) -> Self {
        self.row_variant = row_variant;
        self
    }

    /// Annotation tags as string slices
    pub(crate) fn annotation_tags(&self) -> Vec<&str> {
        self.annotation_tags.iter().map(String::as_str).collect()
    }

    /// Load options from TOML, missing keys keep their defaults
    #[cfg(feature = "formats")]
    pub fn from_toml(source: &str) -> crate::utils::error::ExtractResult<Self> {
        Ok(toml::from_str(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ExtractOptions::default();
        assert_eq!(opts.row_variant, RowVariant::PreferCollapsed);
        assert_eq!(opts.collapsed_row_class, "vsHide");
        assert_eq!(opts.broken_link_marker, "redlink=1");
        assert_eq!(opts.placeholder, "—");
        assert_eq!(opts.annotation_tags(), vec!["sup", "dl", "ul", "abbr"]);
        assert!(opts.split_spans);
    }

    #[test]
    fn test_strict_preset() {
        let opts = ExtractOptions::strict();
        assert_eq!(opts.row_variant, RowVariant::AllRows);
        assert!(!opts.split_spans);
        assert_eq!(opts.placeholder, "—");
    }

    #[cfg(feature = "formats")]
    #[test]
    fn test_from_toml_partial() {
        let opts = ExtractOptions::from_toml("row_variant = \"all_rows\"\nplaceholder = \"-\"\n")
            .unwrap();
        assert_eq!(opts.row_variant, RowVariant::AllRows);
        assert_eq!(opts.placeholder, "-");
        assert_eq!(opts.collapsed_row_class, "vsHide");
    }

    #[cfg(feature = "formats")]
    #[test]
    fn test_from_toml_invalid() {
        let err = ExtractOptions::from_toml("row_variant = \"sideways\"").unwrap_err();
        assert!(err.to_string().contains("Config error"));
    }
}
