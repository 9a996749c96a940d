//! Cell classification
//!
//! Whether a cell is a label or a word form is decided once, here, from
//! three signals: its markup role (`td`/`th`), its text, and where its links
//! point. Links are the discriminating signal: on Wiktionary a word form
//! links to its own entry in the table's language (`/wiki/Hunde#German`),
//! while labels link to glossary pages or nowhere at all.
//!
//! Uncertain cells fall back to [`CellKind::Header`], so doubtful text is
//! treated as structure rather than invented as a word form.

use crate::core::dom::{DocumentNode, NodeChild};
use crate::data::constants::{HREF_ATTR, LINK_TAG, PARAGRAPH_TAG, SPAN_TAG, SUPERSCRIPT_TAG};
use crate::utils::text::{clean_text, is_blank_or_placeholder, link_language, split_forms};

use super::cell::{CellKind, CellRole};
use super::options::ExtractOptions;

/// Classifies cells and extracts their text for one target language
#[derive(Debug, Clone)]
pub struct CellClassifier<'a> {
    options: &'a ExtractOptions,
    language: String,
}

impl<'a> CellClassifier<'a> {
    pub fn new(language: &str, options: &'a ExtractOptions) -> Self {
        Self {
            options,
            language: link_language(language),
        }
    }

    pub fn options(&self) -> &ExtractOptions {
        self.options
    }

    /// Language as matched against link targets (spaces replaced by underscores)
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Whether a link target points at an entry in the target language
    pub fn targets_language(&self, href: &str) -> bool {
        href.ends_with(&self.language)
    }

    /// Whether a link target is a link to a page that does not exist yet
    pub fn is_broken_link(&self, href: &str) -> bool {
        href.ends_with(&self.options.broken_link_marker)
    }

    /// Target of the first hyperlink inside `node`, ignoring annotations
    pub fn first_link_target<N: DocumentNode>(&self, node: &N) -> Option<String> {
        let tags = self.options.annotation_tags();
        node.find_all_pruned(&[LINK_TAG], &tags, |link| link.attr(HREF_ATTR).is_some())
            .first()
            .and_then(|link| link.attr(HREF_ATTR).map(str::to_string))
    }

    /// Targets of every hyperlink inside `node`, ignoring annotations
    pub fn link_targets<N: DocumentNode>(&self, node: &N) -> Vec<String> {
        let tags = self.options.annotation_tags();
        node.find_all_pruned(&[LINK_TAG], &tags, |link| link.attr(HREF_ATTR).is_some())
            .iter()
            .filter_map(|link| link.attr(HREF_ATTR).map(str::to_string))
            .collect()
    }

    /// Whether `node`'s first link points into the target language
    pub fn carries_language_link<N: DocumentNode>(&self, node: &N) -> bool {
        self.first_link_target(node)
            .is_some_and(|href| self.targets_language(&href))
    }

    /// Cleaned text of a cell
    ///
    /// Annotation subtrees are dropped. When span splitting is enabled and
    /// the cell holds spans carrying target-language links, only those spans
    /// are read, one per line.
    pub fn cell_text<N: DocumentNode>(&self, node: &N) -> String {
        let skip = self.options.annotation_tags();

        if self.options.split_spans {
            let mut spans = Vec::new();
            self.collect_language_spans(node, &skip, &mut spans);
            if !spans.is_empty() {
                return spans
                    .iter()
                    .map(|span| clean_text(&span.text_excluding(skip.as_slice())))
                    .filter(|text| !text.is_empty())
                    .collect::<Vec<_>>()
                    .join("\n");
            }
        }

        clean_text(&node.text_excluding(skip.as_slice()))
    }

    // Outermost spans with a target-language link; nested spans are read through their parent
    fn collect_language_spans<N: DocumentNode>(&self, node: &N, skip: &[&str], found: &mut Vec<N>) {
        for child in node.children() {
            if child.is_any_of(skip) {
                continue;
            }
            if child.tag_name() == SPAN_TAG && self.carries_language_link(&child) {
                found.push(child);
            } else {
                self.collect_language_spans(&child, skip, found);
            }
        }
    }

    /// Classify a cell given its cleaned text
    pub fn classify<N: DocumentNode>(&self, node: &N, text: &str) -> CellKind {
        if is_blank_or_placeholder(text, &self.options.placeholder) {
            return CellKind::Empty;
        }

        match CellRole::of(node) {
            // Cross-references to other languages or glossary pages are labels
            CellRole::Data => {
                if self.is_data_content(node) && !self.carries_foreign_link(node) {
                    CellKind::Content
                } else {
                    CellKind::Header
                }
            }
            // Header-styled word forms are recognised by their language link
            CellRole::Header => {
                if self.carries_language_link(node) {
                    CellKind::Content
                } else {
                    CellKind::Header
                }
            }
        }
    }

    /// Whether `node`'s first link points outside the target language and
    /// is not a broken link
    pub fn carries_foreign_link<N: DocumentNode>(&self, node: &N) -> bool {
        self.first_link_target(node)
            .is_some_and(|href| !self.targets_language(&href) && !self.is_broken_link(&href))
    }

    /// Whether `node` is laid out as a word-form cell, ignoring its links:
    /// a non-empty data cell that neither opens with a footnote mark nor
    /// wraps paragraphs
    pub fn is_form_cell<N: DocumentNode>(&self, node: &N) -> bool {
        CellRole::of(node) == CellRole::Data
            && !is_blank_or_placeholder(&self.cell_text(node), &self.options.placeholder)
            && self.is_data_content(node)
    }

    /// Text and classification in one step
    pub fn read<N: DocumentNode>(&self, node: &N) -> (String, CellKind) {
        let text = self.cell_text(node);
        let kind = self.classify(node, &text);
        (text, kind)
    }

    // Footnote-led or paragraph-wrapping data cells are notes, not forms
    fn is_data_content<N: DocumentNode>(&self, node: &N) -> bool {
        let opens_with_annotation = matches!(
            node.first_significant_child(),
            Some(NodeChild::Element(first)) if first.tag_name() == SUPERSCRIPT_TAG
        );
        !opens_with_annotation && node.find_first(&[PARAGRAPH_TAG]).is_none()
    }

    /// Word forms in cleaned cell text
    pub fn forms(&self, text: &str) -> Vec<String> {
        split_forms(text)
            .into_iter()
            .filter(|form| form != &self.options.placeholder)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dom::HtmlDocument;
    use scraper::ElementRef;

    fn first_cell<'a>(doc: &'a HtmlDocument) -> ElementRef<'a> {
        doc.select_first("td, th").unwrap()
    }

    fn classify(html: &str, language: &str) -> (String, CellKind) {
        let doc = HtmlDocument::parse_fragment(&format!("<table><tr>{}</tr></table>", html));
        let options = ExtractOptions::default();
        let classifier = CellClassifier::new(language, &options);
        classifier.read(&first_cell(&doc))
    }

    #[test]
    fn test_empty_cells() {
        assert_eq!(classify("<td>  </td>", "German").1, CellKind::Empty);
        assert_eq!(classify("<td>—</td>", "German").1, CellKind::Empty);
        assert_eq!(classify("<th></th>", "German").1, CellKind::Empty);
    }

    #[test]
    fn test_data_cell_is_content() {
        let (text, kind) = classify(r#"<td><a href="/wiki/Hund#German">Hund</a></td>"#, "German");
        assert_eq!(kind, CellKind::Content);
        assert_eq!(text, "Hund");
    }

    #[test]
    fn test_data_cell_without_link_is_content() {
        assert_eq!(classify("<td>Hunde</td>", "German").1, CellKind::Content);
    }

    #[test]
    fn test_data_cell_with_paragraph_is_header() {
        assert_eq!(classify("<td><p>notes</p></td>", "German").1, CellKind::Header);
    }

    #[test]
    fn test_data_cell_opening_with_superscript_is_header() {
        assert_eq!(
            classify("<td><sup>1</sup>Used rarely</td>", "German").1,
            CellKind::Header
        );
    }

    #[test]
    fn test_data_cell_with_foreign_link_is_header() {
        let (_, kind) = classify(r#"<td><a href="/wiki/chien#French">chien</a></td>"#, "German");
        assert_eq!(kind, CellKind::Header);
    }

    #[test]
    fn test_data_cell_with_broken_link_is_content() {
        let (_, kind) = classify(
            r#"<td><a href="/w/index.php?title=Hundchen&amp;action=edit&amp;redlink=1">Hundchen</a></td>"#,
            "German",
        );
        assert_eq!(kind, CellKind::Content);
    }

    #[test]
    fn test_form_cell_ignores_links() {
        let doc = HtmlDocument::parse_fragment(
            r#"<table><tr><td><a href="/wiki/chien#French">chien</a></td><th>sg</th></tr></table>"#,
        );
        let options = ExtractOptions::default();
        let classifier = CellClassifier::new("German", &options);
        let cells = doc.select_all("td, th");
        assert!(classifier.is_form_cell(&cells[0]));
        assert!(!classifier.is_form_cell(&cells[1]));
    }

    #[test]
    fn test_header_cell_with_language_link_is_content() {
        let (text, kind) = classify(r#"<th><a href="/wiki/Hund#German">Hund</a></th>"#, "German");
        assert_eq!(kind, CellKind::Content);
        assert_eq!(text, "Hund");
    }

    #[test]
    fn test_header_cell_without_link_is_header() {
        assert_eq!(classify("<th>nominative</th>", "German").1, CellKind::Header);
    }

    #[test]
    fn test_header_cell_with_foreign_link_is_header() {
        let (_, kind) = classify(
            r#"<th><a href="/wiki/nominative_case">nominative</a></th>"#,
            "German",
        );
        assert_eq!(kind, CellKind::Header);
    }

    #[test]
    fn test_language_with_spaces() {
        let (_, kind) = classify(
            r#"<th><a href="/wiki/hund#Old_English">hund</a></th>"#,
            "Old English",
        );
        assert_eq!(kind, CellKind::Content);
    }

    #[test]
    fn test_annotations_removed_from_text() {
        let (text, kind) = classify(
            r#"<td><a href="/wiki/Hund#German">Hund</a><sup>1</sup></td>"#,
            "German",
        );
        assert_eq!(text, "Hund");
        assert_eq!(kind, CellKind::Content);
    }

    #[test]
    fn test_language_spans_split_by_line() {
        let (text, _) = classify(
            r#"<td><span><a href="/wiki/Hundes#German">Hundes</a></span> <span><a href="/wiki/Hunds#German">Hunds</a></span> <span>(rare)</span></td>"#,
            "German",
        );
        assert_eq!(text, "Hundes\nHunds");
    }

    #[test]
    fn test_spans_without_language_links_keep_whole_text() {
        let (text, kind) = classify(r#"<th><span title="case">nominative</span></th>"#, "German");
        assert_eq!(text, "nominative");
        assert_eq!(kind, CellKind::Header);
    }

    #[test]
    fn test_broken_link_detection() {
        let options = ExtractOptions::default();
        let classifier = CellClassifier::new("German", &options);
        assert!(classifier.is_broken_link("/w/index.php?title=Hundchen&action=edit&redlink=1"));
        assert!(!classifier.is_broken_link("/wiki/Hund#German"));
    }

    #[test]
    fn test_forms_drop_placeholder() {
        let options = ExtractOptions::default();
        let classifier = CellClassifier::new("German", &options);
        assert_eq!(classifier.forms("Hund, —, Hunde"), vec!["Hund", "Hunde"]);
    }
}
