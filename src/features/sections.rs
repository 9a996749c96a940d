//! Inflection sections
//!
//! Wiktionary puts inflection tables under headings such as "Declension",
//! "Conjugation" or "Inflection", optionally numbered and followed by an
//! "[edit]" link. Only those sections are read; every other heading yields
//! nothing.

use crate::core::dom::DocumentNode;
use crate::core::table::{extract_inflections, ExtractOptions, ExtractOutput};
use crate::data::constants::{HEADING_PREFIX_LEN, INFLECTIONS_HEADING, INFLECTION_HEADING_PREFIXES};
use crate::utils::text::clean_text;

/// Heading text without the trailing edit link, e.g. `"Declension[edit]"` -> `"Declension"`
pub fn clean_heading(heading: &str) -> String {
    let text = clean_text(heading);
    text.split('[').next().unwrap_or_default().trim().to_string()
}

fn heading_prefix(heading: &str) -> String {
    heading.chars().take(HEADING_PREFIX_LEN).collect()
}

/// Whether `heading` introduces an inflection table
pub fn is_inflection_heading(heading: &str) -> bool {
    INFLECTION_HEADING_PREFIXES.contains(heading_prefix(&clean_heading(heading)).as_str())
}

/// Canonical heading name: declension and conjugation headings are all
/// "Inflections", anything else is returned cleaned but unchanged
pub fn normalize_section_heading(heading: &str) -> String {
    let heading = clean_heading(heading);
    if is_inflection_heading(&heading) {
        INFLECTIONS_HEADING.to_string()
    } else {
        heading
    }
}

/// Extract the section's inflections when `heading` is an inflection heading
pub fn extract_section<N: DocumentNode>(
    heading: &str,
    section: &N,
    language: &str,
    options: &ExtractOptions,
) -> Option<ExtractOutput> {
    if !is_inflection_heading(heading) {
        log::trace!("Skipping section {:?}", heading);
        return None;
    }
    Some(extract_inflections(section, language, options))
}
