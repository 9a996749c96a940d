//! Export and printing of extracted inflections
//!
//! Supports:
//! - Flat `(column, row, value)` records for tabular consumers
//! - A sorted, indented plain-text listing
//! - JSON, YAML and CSV serialisation (feature `formats`)

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::core::table::{InflectionTable, SimpleValues};
use crate::utils::error::ExtractError;

#[cfg(feature = "formats")]
use crate::core::table::ExtractOutput;
#[cfg(feature = "formats")]
use crate::utils::error::ExtractResult;

/// One stored form with its header paths
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct InflectionRow {
    pub column: String,
    pub row: String,
    pub value: String,
}

/// Flatten a table into records, in table order
pub fn flatten(table: &InflectionTable) -> Vec<InflectionRow> {
    let mut rows = Vec::with_capacity(table.form_count());

    for (column, by_row) in table {
        for (row, values) in by_row {
            for value in values {
                rows.push(InflectionRow {
                    column: column.clone(),
                    row: row.clone(),
                    value: value.clone(),
                });
            }
        }
    }

    rows
}

/// Plain-text listing: column paths, then their row paths indented, then
/// the forms, all sorted
pub fn render_text(table: &InflectionTable) -> String {
    let mut output = String::new();

    let mut columns: Vec<_> = table.iter().collect();
    columns.sort_by(|a, b| a.0.cmp(b.0));

    for (column, by_row) in columns {
        output.push_str(column);
        output.push_str(":\n");

        let mut rows: Vec<_> = by_row.iter().collect();
        rows.sort_by(|a, b| a.0.cmp(b.0));

        for (row, values) in rows {
            output.push_str("    ");
            output.push_str(row);
            output.push('\n');

            let mut values: Vec<&String> = values.iter().collect();
            values.sort();
            for value in values {
                output.push_str("        ");
                output.push_str(value);
                output.push('\n');
            }
        }
    }

    output
}

/// One form per line, in traversal order
pub fn render_simple(simple: &SimpleValues) -> String {
    simple.iter().collect::<Vec<_>>().join("\n")
}

/// Output formats for extraction results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Nested object: column path -> row path -> forms
    #[default]
    Json,
    /// Same structure as JSON
    Yaml,
    /// `column,row,value` records with a header line
    Csv,
    /// Sorted indented listing
    Text,
    /// Forms only, one per line
    Simple,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
            ExportFormat::Csv => "csv",
            ExportFormat::Text => "text",
            ExportFormat::Simple => "simple",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ExportFormat {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            "csv" => Ok(ExportFormat::Csv),
            "text" | "txt" => Ok(ExportFormat::Text),
            "simple" => Ok(ExportFormat::Simple),
            other => Err(ExtractError::invalid(format!("unknown format: {}", other))),
        }
    }
}

/// Serialise the table as pretty-printed JSON
#[cfg(feature = "formats")]
pub fn to_json(table: &InflectionTable) -> ExtractResult<String> {
    Ok(serde_json::to_string_pretty(table)?)
}

/// Serialise the table as YAML
#[cfg(feature = "formats")]
pub fn to_yaml(table: &InflectionTable) -> ExtractResult<String> {
    Ok(serde_yaml::to_string(table)?)
}

/// Write the flattened table as CSV with a `column,row,value` header
#[cfg(feature = "formats")]
pub fn to_csv(table: &InflectionTable) -> ExtractResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in flatten(table) {
        writer.serialize(record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| ExtractError::serialize("csv", err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| ExtractError::serialize("csv", err.to_string()))
}

/// Render an extraction result in `format`
#[cfg(feature = "formats")]
pub fn export(output: &ExtractOutput, format: ExportFormat) -> ExtractResult<String> {
    match format {
        ExportFormat::Json => to_json(&output.table),
        ExportFormat::Yaml => to_yaml(&output.table),
        ExportFormat::Csv => to_csv(&output.table),
        ExportFormat::Text => Ok(render_text(&output.table)),
        ExportFormat::Simple => Ok(render_simple(&output.simple)),
    }
}
