//! HtmlDocument: parsed HTML tree behind a lock.

use std::fs;
use std::path::Path;

use ego_tree::{NodeId, NodeRef};
use parking_lot::RwLock;
use scraper::{ElementRef, Html, Node};
use tracing::debug;

use tablescope_protocols::{DocumentAdapter, tags};

use crate::error::DomError;

/// A parsed HTML document.
///
/// Node handles are arena ids; they stay valid after the node is detached,
/// but [`DocumentAdapter::is_attached`] reports them as gone.
#[derive(Debug)]
pub struct HtmlDocument {
    html: RwLock<Html>,
}

impl HtmlDocument {
    /// Parse a complete HTML document. Implied `<tbody>` sections are
    /// materialised the way a browser does.
    pub fn parse(source: &str) -> Self {
        let html = Html::parse_document(source);
        debug!("Parsed document: {} nodes", html.tree.values().count());
        Self {
            html: RwLock::new(html),
        }
    }

    /// Load and parse an HTML file.
    pub fn load(path: &Path) -> Result<Self, DomError> {
        let bytes = fs::read(path)?;
        let source = String::from_utf8(bytes)?;
        debug!("Loaded {}", path.display());
        Ok(Self::parse(&source))
    }

    /// Handle of the `<html>` element.
    pub fn root(&self) -> NodeId {
        self.html.read().root_element().id()
    }

    /// Unlink a subtree from the document.
    ///
    /// Returns `false` for unknown handles and for the document node itself.
    pub fn detach(&self, node: NodeId) -> bool {
        let mut html = self.html.write();
        if node == html.tree.root().id() {
            return false;
        }
        match html.tree.get_mut(node) {
            Some(mut node_mut) => {
                node_mut.detach();
                debug!("Detached node {:?}", node);
                true
            }
            None => false,
        }
    }

    /// Value of an attribute on an element.
    pub fn attr(&self, node: NodeId, name: &str) -> Option<String> {
        let html = self.html.read();
        let element = html.tree.get(node).and_then(ElementRef::wrap)?;
        element.value().attr(name).map(str::to_string)
    }

    /// Run `f` with a read guard on the tree.
    pub(crate) fn with_tree<R>(&self, f: impl FnOnce(&Html) -> R) -> R {
        let html = self.html.read();
        f(&html)
    }
}

fn element_name<'a>(node: &NodeRef<'a, Node>) -> Option<&'a str> {
    node.value().as_element().map(|e| e.name())
}

pub(crate) fn matches_tag(node: &NodeRef<'_, Node>, tag: &str) -> bool {
    match element_name(node) {
        Some(name) => tag == tags::ANY || name.eq_ignore_ascii_case(tag),
        None => false,
    }
}

fn child_elements<'a>(node: NodeRef<'a, Node>, tag: &str) -> impl Iterator<Item = NodeId> + 'a {
    let tag = tag.to_string();
    node.children()
        .filter(move |child| matches_tag(child, &tag))
        .map(|child| child.id())
}

/// Leading digits of a span attribute; `None` when there are none.
fn parse_span(value: &str) -> Option<u32> {
    let digits: String = value
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

impl DocumentAdapter for HtmlDocument {
    type Node = NodeId;

    fn tag_name(&self, node: &NodeId) -> String {
        self.with_tree(|html| match html.tree.get(*node) {
            Some(node_ref) => match node_ref.value() {
                Node::Element(element) => element.name().to_ascii_lowercase(),
                Node::Document => "#document".to_string(),
                Node::Fragment => "#document-fragment".to_string(),
                Node::Text(_) => "#text".to_string(),
                Node::Comment(_) => "#comment".to_string(),
                _ => "#other".to_string(),
            },
            None => String::new(),
        })
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.with_tree(|html| html.tree.get(*node)?.parent().map(|p| p.id()))
    }

    fn rows_of(&self, node: &NodeId) -> Vec<NodeId> {
        self.with_tree(|html| {
            let Some(node_ref) = html.tree.get(*node) else {
                return Vec::new();
            };
            if !matches_tag(&node_ref, tags::TABLE) {
                return child_elements(node_ref, tags::TR).collect();
            }

            let mut rows = Vec::new();
            for child in node_ref.children() {
                match element_name(&child) {
                    Some(name) if name.eq_ignore_ascii_case(tags::TR) => rows.push(child.id()),
                    Some(name)
                        if [tags::THEAD, tags::TBODY, tags::TFOOT]
                            .iter()
                            .any(|section| name.eq_ignore_ascii_case(section)) =>
                    {
                        rows.extend(child_elements(child, tags::TR));
                    }
                    _ => {}
                }
            }
            rows
        })
    }

    fn cells_of(&self, row: &NodeId) -> Vec<NodeId> {
        self.with_tree(|html| match html.tree.get(*row) {
            Some(row_ref) => row_ref
                .children()
                .filter(|child| matches_tag(child, tags::TD) || matches_tag(child, tags::TH))
                .map(|child| child.id())
                .collect(),
            None => Vec::new(),
        })
    }

    fn bodies_of(&self, table: &NodeId) -> Vec<NodeId> {
        self.with_tree(|html| match html.tree.get(*table) {
            Some(table_ref) => child_elements(table_ref, tags::TBODY).collect(),
            None => Vec::new(),
        })
    }

    fn descendants_by_tag(&self, node: &NodeId, tag: &str) -> Vec<NodeId> {
        self.with_tree(|html| match html.tree.get(*node) {
            Some(node_ref) => node_ref
                .descendants()
                .skip(1)
                .filter(|d| matches_tag(d, tag))
                .map(|d| d.id())
                .collect(),
            None => Vec::new(),
        })
    }

    fn text(&self, node: &NodeId) -> String {
        self.with_tree(|html| {
            let Some(node_ref) = html.tree.get(*node) else {
                return String::new();
            };
            match ElementRef::wrap(node_ref) {
                Some(element) => element.text().collect(),
                None => node_ref
                    .value()
                    .as_text()
                    .map(|text| String::from(&**text))
                    .unwrap_or_default(),
            }
        })
    }

    fn column_span(&self, node: &NodeId) -> u32 {
        self.attr(*node, "colspan")
            .as_deref()
            .and_then(parse_span)
            .unwrap_or(1)
            .max(1)
    }

    fn is_attached(&self, node: &NodeId) -> bool {
        self.with_tree(|html| {
            let root = html.tree.root().id();
            match html.tree.get(*node) {
                Some(node_ref) => {
                    node_ref.id() == root || node_ref.ancestors().any(|a| a.id() == root)
                }
                None => false,
            }
        })
    }
}

#[cfg(test)]
mod span_tests {
    use super::parse_span;

    #[test]
    fn test_parse_span() {
        assert_eq!(parse_span("3"), Some(3));
        assert_eq!(parse_span(" 2 "), Some(2));
        assert_eq!(parse_span("4px"), Some(4));
        assert_eq!(parse_span("wide"), None);
        assert_eq!(parse_span(""), None);
    }
}
