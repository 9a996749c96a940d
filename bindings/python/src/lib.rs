//! Python bindings for wikt-inflect
//!
//! Results are returned as plain `dict`/`list` values; Python dicts keep
//! insertion order, so column and row paths come back in document order.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use wikt_inflect::{ExtractOptions, InflectionTable, RowVariant};

fn options_for(all_rows: bool) -> ExtractOptions {
    let row_variant = if all_rows {
        RowVariant::AllRows
    } else {
        RowVariant::PreferCollapsed
    };
    ExtractOptions::default().with_row_variant(row_variant)
}

fn check_language(language: &str) -> PyResult<()> {
    if language.trim().is_empty() {
        return Err(PyValueError::new_err("language must not be empty"));
    }
    Ok(())
}

fn table_to_dict<'py>(py: Python<'py>, table: &InflectionTable) -> PyResult<Bound<'py, PyDict>> {
    let columns = PyDict::new(py);
    for (column, rows) in table {
        let by_row = PyDict::new(py);
        for (row, forms) in rows {
            by_row.set_item(row.as_str(), PyList::new(py, forms.iter().map(String::as_str))?)?;
        }
        columns.set_item(column.as_str(), by_row)?;
    }
    Ok(columns)
}

/// Extract the inflection table for `language` from HTML.
///
/// Returns `{column_path: {row_path: [forms]}}`. When `word` is given the
/// table is only returned if its first form is that word.
#[pyfunction]
#[pyo3(signature = (html, language, word=None, all_rows=false))]
fn parse_inflections<'py>(
    py: Python<'py>,
    html: &str,
    language: &str,
    word: Option<&str>,
    all_rows: bool,
) -> PyResult<Bound<'py, PyDict>> {
    check_language(language)?;
    let options = options_for(all_rows);
    let output = py.allow_threads(|| {
        wikt_inflect::parse_inflections_with_options(html, language, &options)
    });

    if word.is_some_and(|word| !output.is_about(word)) {
        return Ok(PyDict::new(py));
    }
    table_to_dict(py, &output.table)
}

/// Every form in the table for `language`, in document order.
#[pyfunction]
#[pyo3(signature = (html, language, all_rows=false))]
fn simple_inflections(py: Python<'_>, html: &str, language: &str, all_rows: bool) -> PyResult<Vec<String>> {
    check_language(language)?;
    let options = options_for(all_rows);
    let output = py.allow_threads(|| {
        wikt_inflect::parse_inflections_with_options(html, language, &options)
    });
    Ok(output.simple.to_vec())
}

/// Canonical section heading ("Declension" and "Conjugation" become "Inflections").
#[pyfunction]
fn normalize_section_heading(heading: &str) -> String {
    wikt_inflect::sections::normalize_section_heading(heading)
}

#[pymodule]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(parse_inflections, m)?)?;
    m.add_function(wrap_pyfunction!(simple_inflections, m)?)?;
    m.add_function(wrap_pyfunction!(normalize_section_heading, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
