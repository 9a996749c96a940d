//! Core extraction modules
//!
//! This module contains the extraction engine:
//! - `dom`: the document query seam and its `scraper` backend
//! - `table`: table selection, grid reconstruction and header inference

pub mod dom;
pub mod table;

// Re-export main types and functions
pub use dom::{DocumentNode, HtmlDocument, NodeChild};
pub use table::{
    build_grid, extract_inflections, extract_table, ExtractOptions, ExtractOutput, Grid,
    InflectionTable, RowVariant, SimpleValues,
};
