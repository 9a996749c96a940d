//! Document query seam
//!
//! The extraction engine never builds or mutates markup trees itself. It
//! consumes any tree that can answer a handful of questions about a node:
//! its tag name, an attribute and its ordered children. Everything
//! else (descendant search, flattened text, class tests) is derived here from
//! those primitives, so a backend only has to implement [`DocumentNode`]'s
//! three required methods.
//!
//! The bundled backend is `scraper` (html5ever), see [`html`].

pub mod html;

pub use html::HtmlDocument;

use crate::data::constants::CLASS_ATTR;

/// One child of a node, in document order
#[derive(Debug, Clone)]
pub enum NodeChild<N> {
    Element(N),
    Text(String),
}

impl<N> NodeChild<N> {
    /// Whether this child is a text run containing only whitespace
    pub fn is_blank_text(&self) -> bool {
        matches!(self, NodeChild::Text(text) if text.trim().is_empty())
    }
}

/// A read-only handle into an external markup tree
///
/// Handles are expected to be cheap to clone (a reference or an index),
/// since the grid stores one per occupied cell.
pub trait DocumentNode: Clone {
    /// Lowercase tag name, e.g. `td`
    fn tag_name(&self) -> &str;

    /// Attribute value, if present
    fn attr(&self, name: &str) -> Option<&str>;

    /// Element and text children in document order
    fn child_nodes(&self) -> Vec<NodeChild<Self>>;

    /// Element children only
    fn children(&self) -> Vec<Self> {
        self.child_nodes()
            .into_iter()
            .filter_map(|child| match child {
                NodeChild::Element(node) => Some(node),
                NodeChild::Text(_) => None,
            })
            .collect()
    }

    /// Whether the node's tag is one of `tags`
    fn is_any_of(&self, tags: &[&str]) -> bool {
        tags.contains(&self.tag_name())
    }

    /// Whether the whitespace-separated `class` attribute contains `class`
    fn has_class(&self, class: &str) -> bool {
        self.attr(CLASS_ATTR)
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Pre-order descendants (self excluded) whose tag is in `tags` and that
    /// satisfy `predicate`. An empty `tags` slice matches every element.
    fn find_all<P>(&self, tags: &[&str], predicate: P) -> Vec<Self>
    where
        P: Fn(&Self) -> bool,
    {
        let mut found = Vec::new();
        collect_descendants(self, tags, &[], &predicate, &mut found);
        found
    }

    /// Like [`find_all`](Self::find_all), but never descends into elements
    /// whose tag is in `prune`
    fn find_all_pruned<P>(&self, tags: &[&str], prune: &[&str], predicate: P) -> Vec<Self>
    where
        P: Fn(&Self) -> bool,
    {
        let mut found = Vec::new();
        collect_descendants(self, tags, prune, &predicate, &mut found);
        found
    }

    /// First descendant with one of `tags`
    fn find_first(&self, tags: &[&str]) -> Option<Self> {
        for child in self.children() {
            if child.is_any_of(tags) {
                return Some(child);
            }
            if let Some(found) = child.find_first(tags) {
                return Some(found);
            }
        }
        None
    }

    /// First child that is an element or a non-blank text run
    fn first_significant_child(&self) -> Option<NodeChild<Self>> {
        self.child_nodes()
            .into_iter()
            .find(|child| !child.is_blank_text())
    }

    /// Flattened text, runs joined by a single space
    fn flat_text(&self) -> String {
        self.text_excluding::<&str>(&[])
    }

    /// Flattened text skipping the whole subtree of any element in `skip`
    fn text_excluding<S: AsRef<str>>(&self, skip: &[S]) -> String {
        let mut runs = Vec::new();
        collect_text(self, skip, &mut runs);
        runs.join(" ")
    }
}

fn collect_descendants<N: DocumentNode>(
    node: &N,
    tags: &[&str],
    prune: &[&str],
    predicate: &dyn Fn(&N) -> bool,
    found: &mut Vec<N>,
) {
    for child in node.children() {
        if (tags.is_empty() || child.is_any_of(tags)) && predicate(&child) {
            found.push(child.clone());
        }
        if !child.is_any_of(prune) {
            collect_descendants(&child, tags, prune, predicate, found);
        }
    }
}

fn collect_text<N: DocumentNode, S: AsRef<str>>(node: &N, skip: &[S], runs: &mut Vec<String>) {
    for child in node.child_nodes() {
        match child {
            NodeChild::Text(text) => runs.push(text),
            NodeChild::Element(element) => {
                let tag = element.tag_name();
                if !skip.iter().any(|s| s.as_ref() == tag) {
                    collect_text(&element, skip, runs);
                }
            }
        }
    }
}
