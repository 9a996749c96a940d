//! `scraper` backend for [`DocumentNode`]

use scraper::{ElementRef, Html, Node, Selector};

use super::{DocumentNode, NodeChild};

impl<'a> DocumentNode for ElementRef<'a> {
    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn child_nodes(&self) -> Vec<NodeChild<Self>> {
        (**self)
            .children()
            .filter_map(|child| match child.value() {
                Node::Element(_) => ElementRef::wrap(child).map(NodeChild::Element),
                Node::Text(text) => {
                    let run: &str = text;
                    Some(NodeChild::Text(run.to_owned()))
                }
                _ => None,
            })
            .collect()
    }
}

/// An owned, parsed HTML tree
///
/// Parsing never fails: html5ever recovers from malformed markup the way a
/// browser does (implicit `tbody`, unclosed cells, stray end tags).
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a complete page
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    /// Parse a fragment such as a single section or table
    pub fn parse_fragment(source: &str) -> Self {
        Self {
            html: Html::parse_fragment(source),
        }
    }

    /// Parse a complete page when the source starts like one, otherwise a fragment
    pub fn parse_auto(source: &str) -> Self {
        let head: String = source.trim_start().chars().take(9).collect();
        let head = head.to_ascii_lowercase();
        if head.starts_with("<!doctype") || head.starts_with("<html") {
            Self::parse(source)
        } else {
            Self::parse_fragment(source)
        }
    }

    /// The root `html` element
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// First element matching a CSS selector, `None` for no match or an invalid selector
    pub fn select_first(&self, css: &str) -> Option<ElementRef<'_>> {
        let selector = Selector::parse(css).ok()?;
        self.html.select(&selector).next()
    }

    /// Every element matching a CSS selector, in document order
    pub fn select_all(&self, css: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(css) {
            Ok(selector) => self.html.select(&selector).collect(),
            Err(_) => {
                log::debug!("Ignoring invalid selector: {css}");
                Vec::new()
            }
        }
    }
}

impl std::fmt::Debug for HtmlDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlDocument")
            .field("root", &self.root().value().name())
            .finish()
    }
}
