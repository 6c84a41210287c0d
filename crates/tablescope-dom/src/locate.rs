//! Locator resolution over an HtmlDocument.

use ego_tree::{NodeId, NodeRef};
use scraper::Node;
use tracing::trace;

use tablescope_protocols::{DocumentAdapter, ElementLocator, Locator};

use crate::document::{HtmlDocument, matches_tag};

fn matches_any(node: &NodeRef<'_, Node>, tags: &[&str]) -> bool {
    tags.iter().any(|tag| matches_tag(node, tag))
}

fn attr_equals(node: &NodeRef<'_, Node>, name: &str, expected: &str) -> bool {
    node.value()
        .as_element()
        .and_then(|e| e.attr(name))
        .is_some_and(|value| value == expected)
}

impl ElementLocator for HtmlDocument {
    fn locate(
        &self,
        scope: Option<&NodeId>,
        tags: &[&str],
        locator: &Locator<NodeId>,
    ) -> Option<NodeId> {
        if let Locator::Node(node) = locator {
            let in_scope = match scope {
                Some(scope) => self.with_tree(|html| {
                    html.tree
                        .get(*node)
                        .is_some_and(|n| n.ancestors().any(|a| a.id() == *scope))
                }),
                None => true,
            };
            let tag_ok = tags.iter().any(|tag| self.has_tag(node, tag));
            return (in_scope && tag_ok && self.is_attached(node)).then_some(*node);
        }

        let found = self.with_tree(|html| {
            let start = match scope {
                Some(scope) => html.tree.get(*scope)?,
                None => html.tree.root(),
            };
            let mut candidates = start
                .descendants()
                .skip(1)
                .filter(|n| matches_any(n, tags));
            match locator {
                Locator::Index(index) => candidates.nth(*index),
                Locator::Id(id) => candidates.find(|n| attr_equals(n, "id", id)),
                Locator::Name(name) => candidates.find(|n| attr_equals(n, "name", name)),
                Locator::Node(_) => None,
            }
            .map(|n| n.id())
        });
        trace!("Located {:?} by {} -> {:?}", tags, locator, found);
        found
    }
}
