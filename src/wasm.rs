//! WASM bindings for wikt-inflect
//!
//! This module provides JavaScript-accessible functions for inflection
//! table extraction.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::{ExtractOptions, InflectionTable, RowVariant};

/// Extraction options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOptions {
    /// Read every row, ignoring the collapsed layout marker
    #[serde(default)]
    pub all_rows: bool,
    /// Read forms from target-language spans, one per line
    #[serde(default = "default_true")]
    pub split_spans: bool,
    /// Only return the table when its first form is this word
    #[serde(default)]
    pub word: Option<String>,
}

#[cfg(feature = "wasm")]
impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            all_rows: false,
            split_spans: true,
            word: None,
        }
    }
}

#[cfg(feature = "wasm")]
impl ParseOptions {
    fn to_extract_options(&self) -> ExtractOptions {
        let row_variant = if self.all_rows {
            RowVariant::AllRows
        } else {
            RowVariant::PreferCollapsed
        };
        ExtractOptions {
            split_spans: self.split_spans,
            ..ExtractOptions::default().with_row_variant(row_variant)
        }
    }
}

#[cfg(feature = "wasm")]
fn default_true() -> bool {
    true
}

/// Extraction result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize)]
pub struct ParseResult {
    /// Column path -> row path -> forms
    pub table: InflectionTable,
    /// Every form, in document order
    pub simple: Vec<String>,
    /// Whether extraction ran to completion
    pub success: bool,
    /// Error message if extraction failed
    pub error: Option<String>,
    /// Rendered diagnostics
    pub warnings: Vec<String>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Extract the inflection table for a language
///
/// # Arguments
/// * `html` - A page, a section or a single table
/// * `language` - Language name as used in entry links, e.g. `"German"`
/// * `options` - Optional `{ allRows, splitSpans, word }` object
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "parseInflections")]
pub fn parse_inflections_wasm(html: &str, language: &str, options: JsValue) -> JsValue {
    let opts: ParseOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    let extract_options = opts.to_extract_options();

    let result = match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        crate::parse_inflections_with_options(html, language, &extract_options)
    })) {
        Ok(output) => {
            let relevant = opts.word.as_deref().map_or(true, |word| output.is_about(word));
            ParseResult {
                table: if relevant {
                    output.table
                } else {
                    InflectionTable::new()
                },
                simple: if relevant { output.simple.to_vec() } else { vec![] },
                success: true,
                error: None,
                warnings: output.diagnostics.iter().map(|d| d.to_string()).collect(),
            }
        }
        Err(e) => {
            // Try to extract panic message for better error reporting
            let error_msg = if let Some(s) = e.downcast_ref::<&str>() {
                format!("Extraction failed: {}", s)
            } else if let Some(s) = e.downcast_ref::<String>() {
                format!("Extraction failed: {}", s)
            } else {
                "Extraction failed: unknown error (check browser console for details)".to_string()
            };
            ParseResult {
                table: InflectionTable::new(),
                simple: vec![],
                success: false,
                error: Some(error_msg),
                warnings: vec![],
            }
        }
    };

    // Plain objects instead of `Map`s so the result reads like JSON
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    result.serialize(&serializer).unwrap_or(JsValue::NULL)
}

/// Every form in the table for a language, in document order
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "simpleInflections")]
pub fn simple_inflections_wasm(html: &str, language: &str) -> JsValue {
    serde_wasm_bindgen::to_value(&crate::simple_inflections(html, language)).unwrap_or(JsValue::NULL)
}

/// Whether a section heading introduces an inflection table
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "isInflectionHeading")]
pub fn is_inflection_heading_wasm(heading: &str) -> bool {
    crate::sections::is_inflection_heading(heading)
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
