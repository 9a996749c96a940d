//! Regression tests for inflection table extraction

use super::*;
use crate::core::dom::HtmlDocument;
use crate::utils::diagnostics::{DiagnosticKind, Diagnostics};
use pretty_assertions::assert_eq;

fn extract(html: &str, language: &str) -> ExtractOutput {
    let doc = HtmlDocument::parse_fragment(html);
    extract_inflections(&doc.root(), language, &ExtractOptions::default())
}

fn forms(output: &ExtractOutput, column: &str, row: &str) -> Vec<String> {
    output
        .table
        .get(column, row)
        .map(|set| set.iter().cloned().collect())
        .unwrap_or_default()
}

fn table_of(entries: &[(&str, &str, &[&str])]) -> InflectionTable {
    let mut table = InflectionTable::new();
    for (column, row, values) in entries {
        table.insert_forms(column, row, values.iter().map(|v| v.to_string()));
    }
    table
}

const GERMAN_HUND: &str = r#"
<div class="mw-parser-output">
  <table class="wikitable">
    <tr><th>related</th></tr>
    <tr><td><a href="/wiki/dog">dog</a></td></tr>
  </table>
  <div class="NavFrame">
    <div class="NavHead">Declension of Hund</div>
    <div class="NavContent">
      <table class="inflection-table">
        <tbody>
          <tr><th colspan="3">masculine, strong</th></tr>
          <tr><th></th><th>singular</th><th>plural</th></tr>
          <tr>
            <th>nominative</th>
            <td><span lang="de"><a href="/wiki/Hund#German">Hund</a></span></td>
            <td><span lang="de"><a href="/wiki/Hunde#German">Hunde</a></span></td>
          </tr>
          <tr>
            <th>genitive</th>
            <td><span lang="de"><a href="/wiki/Hundes#German">Hundes</a></span>, <span lang="de"><a href="/wiki/Hunds#German">Hunds</a></span></td>
            <td><span lang="de"><a href="/wiki/Hunde#German">Hunde</a></span></td>
          </tr>
          <tr>
            <th>dative</th>
            <td><span lang="de"><a href="/wiki/Hund#German">Hund</a></span><br><span lang="de"><a href="/wiki/Hunde#German">Hunde</a></span><sup>1</sup></td>
            <td><span lang="de"><a href="/wiki/Hunden#German">Hunden</a></span></td>
          </tr>
        </tbody>
      </table>
    </div>
  </div>
</div>"#;

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_scenario_basic_noun() {
    let html = "<table>\
        <tr><th></th><th>singular</th><th>plural</th></tr>\
        <tr><th>nominative</th><td>cat</td><td>cats</td></tr>\
        <tr><th>genitive</th><td>cat's</td><td>cats'</td></tr>\
        </table>";
    let output = extract(html, "English");

    let expected = table_of(&[
        ("singular", "nominative", &["cat"]),
        ("singular", "genitive", &["cat's"]),
        ("plural", "nominative", &["cats"]),
        ("plural", "genitive", &["cats'"]),
    ]);
    assert_eq!(output.table, expected);
    assert_eq!(
        output.table.column_paths().collect::<Vec<_>>(),
        vec!["singular", "plural"]
    );
    assert_eq!(output.simple.to_vec(), vec!["cat", "cats", "cat's", "cats'"]);
    assert!(output.is_about("cat"));
    assert!(output.diagnostics.is_empty());
}

#[test]
fn test_scenario_foreign_language_tables() {
    let html = r#"<div>
        <table id="first"><tr><th><a href="/wiki/chien#French">chien</a></th></tr>
            <tr><td><a href="/wiki/chiens#French">chiens</a></td></tr></table>
        <table id="second"><tr><td><a href="/wiki/chat#French">chat</a></td></tr></table>
        </div>"#;
    let doc = HtmlDocument::parse_fragment(html);
    let options = ExtractOptions::default();
    let classifier = CellClassifier::new("German", &options);
    let mut diagnostics = Diagnostics::new();

    let selection = TableSelector::new(&classifier).select(&doc.root(), &mut diagnostics);
    assert_eq!(selection.outcome, SelectionOutcome::Fallback);
    assert_eq!(selection.node.attr("id"), Some("first"));

    let grid = GridBuilder::new(&classifier).build(&selection.node, &mut diagnostics);
    assert!(grid.cells().iter().all(|cell| cell.kind == CellKind::Header));

    let output = extract(html, "German");
    assert!(output.table.is_empty());
    assert!(output.simple.is_empty());
    assert!(output.diagnostics.contains(DiagnosticKind::LanguageFallback));
}

#[test]
fn test_scenario_oversized_rowspan() {
    let html = "<table>\
        <tr><th rowspan=\"5\">case</th><th>singular</th></tr>\
        <tr><td>x</td></tr>\
        <tr><td>y</td></tr>\
        </table>";
    let doc = HtmlDocument::parse_fragment(html);
    let table = doc.select_first("table").unwrap();
    let (grid, diagnostics) = build_grid(&table, "English", &ExtractOptions::default());

    assert_eq!(grid.num_rows(), 3);
    let label = grid.get((0, 0)).unwrap();
    assert_eq!(label.row_span, 3);
    assert_eq!(label.declared_row_span, 5);
    assert!(grid.iter().all(|((row, _), _)| row < 3));
    assert_eq!(grid.get((2, 0)).unwrap().text, "case");
    assert!(diagnostics.contains(DiagnosticKind::SpanClamped));
}

// ============================================================================
// Grid properties
// ============================================================================

#[test]
fn test_span_expansion_completeness() {
    let html = "<table>\
        <tr><th rowspan=\"2\" colspan=\"2\">block</th><th>a</th></tr>\
        <tr><td>b</td></tr>\
        <tr><td>c</td><td colspan=\"2\">d</td></tr>\
        </table>";
    let doc = HtmlDocument::parse_fragment(html);
    let table = doc.select_first("table").unwrap();
    let (grid, diagnostics) = build_grid(&table, "English", &ExtractOptions::default());

    assert!(diagnostics.is_empty());
    for cell in grid.cells() {
        let (top, left) = cell.origin;
        for row in top..top + cell.row_span {
            for col in left..left + cell.col_span {
                assert_eq!(grid.get((row, col)).map(|c| c.origin), Some(cell.origin));
            }
        }
    }
    for (coord, cell) in grid.iter() {
        assert!(cell.covers(coord));
    }
    assert_eq!(grid.len(), 9);
    assert_eq!(grid.cells().len(), 5);
}

#[test]
fn test_divider_column_elided() {
    let html = "<table>\
        <tr><th></th><th>singular</th><td rowspan=\"3\"></td><th>plural</th></tr>\
        <tr><th>nominative</th><td>Hund</td><td>Hunde</td></tr>\
        <tr><th>genitive</th><td>Hundes</td><td>Hunde</td></tr>\
        </table>";
    let output = extract(html, "German");

    let expected = table_of(&[
        ("singular", "nominative", &["Hund"]),
        ("singular", "genitive", &["Hundes"]),
        ("plural", "nominative", &["Hunde"]),
        ("plural", "genitive", &["Hunde"]),
    ]);
    assert_eq!(output.table, expected);
    assert!(output.diagnostics.contains(DiagnosticKind::DividerColumn));
    assert!(!output.diagnostics.has_warnings());

    let doc = HtmlDocument::parse_fragment(html);
    let table = doc.select_first("table").unwrap();
    let (grid, _) = build_grid(&table, "German", &ExtractOptions::default());
    assert_eq!(grid.num_cols(), 3);
}

#[test]
fn test_header_run_contiguity() {
    let html = "<table>\
        <tr><th>c0</th><th>c1</th><th>c2</th><th>c3</th><th>c4</th><th>c5</th></tr>\
        <tr><td>x0</td><td>x1</td><th>h2</th><td>x3</td><th>h4</th><td>x5</td></tr>\
        </table>";
    let output = extract(html, "English");

    assert_eq!(forms(&output, "c5", "h4"), vec!["x5"]);
    assert_eq!(forms(&output, "c3", "h2"), vec!["x3"]);
    assert!(output.table.get("c5", "h2 > h4").is_none());
    // no row label before the first content cells
    assert!(output.table.column("c0").is_none());
}

#[test]
fn test_determinism() {
    let first = extract(GERMAN_HUND, "German");
    let second = extract(GERMAN_HUND, "German");
    assert_eq!(first, second);
    assert_eq!(
        first.table.iter().collect::<Vec<_>>(),
        second.table.iter().collect::<Vec<_>>()
    );
}

#[test]
fn test_dedup_preserves_order_across_cells() {
    let html = "<table>\
        <tr><th></th><th colspan=\"2\">singular</th></tr>\
        <tr><th>nominative</th><td>a, b</td><td>a / c</td></tr>\
        </table>";
    let output = extract(html, "English");
    assert_eq!(forms(&output, "singular", "nominative"), vec!["a", "b", "c"]);
}

// ============================================================================
// Degenerate tables
// ============================================================================

#[test]
fn test_single_header_row_accepts_empty_row_path() {
    let html = "<table>\
        <tr><th>singular</th><th>plural</th></tr>\
        <tr><td>cat</td><td>cats</td></tr>\
        <tr><td>kitty</td><td>kitties</td></tr>\
        </table>";
    let output = extract(html, "English");
    assert_eq!(forms(&output, "singular", ""), vec!["cat", "kitty"]);
    assert_eq!(forms(&output, "plural", ""), vec!["cats", "kitties"]);
}

#[test]
fn test_missing_row_labels_are_skipped() {
    let html = "<table>\
        <tr><th>singular</th><th>plural</th></tr>\
        <tr><td>cat</td><td>cats</td></tr>\
        </table>";
    let output = extract(html, "English");
    assert!(output.table.is_empty());
    assert_eq!(output.simple.to_vec(), vec!["cat", "cats"]);
}

#[test]
fn test_ragged_rows_leave_holes() {
    let html = "<table>\
        <tr><th></th><th>singular</th><th>plural</th></tr>\
        <tr><th>nominative</th><td>cat</td></tr>\
        <tr><th>genitive</th><td>cat's</td><td>cats'</td></tr>\
        </table>";
    let output = extract(html, "English");
    assert_eq!(forms(&output, "plural", "genitive"), vec!["cats'"]);
    assert!(output.table.get("plural", "nominative").is_none());
    assert!(output.diagnostics.contains(DiagnosticKind::RaggedRow));
}

#[test]
fn test_section_without_table() {
    let output = extract("<div><p>No inflections.</p></div>", "English");
    assert!(output.table.is_empty());
    assert!(output.simple.is_empty());
    assert!(output.diagnostics.contains(DiagnosticKind::NoTable));
    assert!(output.diagnostics.contains(DiagnosticKind::EmptyTable));
}

#[test]
fn test_placeholder_cells_are_empty() {
    let html = "<table>\
        <tr><th></th><th>singular</th><th>plural</th></tr>\
        <tr><th>nominative</th><td>Leute</td><td>—</td></tr>\
        </table>";
    let doc = HtmlDocument::parse_fragment(html);
    let table = doc.select_first("table").unwrap();
    let output = extract_table(&table, "German", &ExtractOptions::default());
    assert_eq!(output.simple.to_vec(), vec!["Leute"]);
    assert!(output.table.column("plural").is_none());
}

// ============================================================================
// Realistic markup
// ============================================================================

#[test]
fn test_german_declension() {
    let output = extract(GERMAN_HUND, "German");

    let expected = table_of(&[
        ("singular", "nominative", &["Hund"]),
        ("singular", "genitive", &["Hundes", "Hunds"]),
        ("singular", "dative", &["Hund", "Hunde"]),
        ("plural", "nominative", &["Hunde"]),
        ("plural", "genitive", &["Hunde"]),
        ("plural", "dative", &["Hunden"]),
    ]);
    assert_eq!(output.table, expected);
    assert_eq!(
        output.simple.to_vec(),
        vec!["Hund", "Hunde", "Hundes", "Hunds", "Hunden"]
    );
    assert!(output.is_about("Hund"));
    assert!(!output.diagnostics.contains(DiagnosticKind::LanguageFallback));
}

#[test]
fn test_collapsed_layout_preferred() {
    let html = "<table>\
        <tr><th></th><th>present</th></tr>\
        <tr><th>ich</th><td>laufe</td></tr>\
        <tr><th>du</th><td>läufst</td></tr>\
        <tr class=\"vsHide\"><th></th><th>present</th></tr>\
        <tr class=\"vsHide\"><th>ich</th><td>laufe</td></tr>\
        </table>";
    let output = extract(html, "German");
    assert_eq!(forms(&output, "present", "ich"), vec!["laufe"]);
    assert!(output.table.get("present", "du").is_none());

    let doc = HtmlDocument::parse_fragment(html);
    let table = doc.select_first("table").unwrap();
    let all = extract_table(&table, "German", &ExtractOptions::strict());
    assert_eq!(forms(&all, "present", "du"), vec!["läufst"]);
}
