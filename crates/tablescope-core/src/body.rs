//! Table bodies.

use std::fmt;

use tracing::debug;

use tablescope_protocols::DocumentAdapter;

use crate::error::{Result, TableError};
use crate::row::RowView;

/// How a body is identified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyLocator<N> {
    /// An explicit `<tbody>` handle.
    Node(N),
    /// Position in the parent table's body collection.
    Index(usize),
}

/// One `<tbody>` section.
///
/// Every call to [`BodyView::locate`] resolves the body again and rebuilds
/// the row list from scratch. A body that cannot be found has no rows.
pub struct BodyView<'a, A: DocumentAdapter> {
    adapter: &'a A,
    locator: BodyLocator<A::Node>,
    parent: Option<A::Node>,
    node: Option<A::Node>,
    rows: Vec<RowView<'a, A>>,
}

impl<'a, A: DocumentAdapter> BodyView<'a, A> {
    /// Create and locate a body. `parent` is the owning table, needed for
    /// [`BodyLocator::Index`].
    pub fn new(adapter: &'a A, locator: BodyLocator<A::Node>, parent: Option<A::Node>) -> Self {
        let mut body = Self {
            adapter,
            locator,
            parent,
            node: None,
            rows: Vec::new(),
        };
        body.locate();
        body
    }

    /// Resolve the body and rebuild its rows.
    pub fn locate(&mut self) {
        self.node = match &self.locator {
            BodyLocator::Node(node) => self
                .adapter
                .is_attached(node)
                .then(|| node.clone()),
            BodyLocator::Index(index) => self
                .parent
                .as_ref()
                .filter(|parent| self.adapter.is_attached(parent))
                .and_then(|parent| self.adapter.bodies_of(parent).into_iter().nth(*index)),
        };

        self.rows = match &self.node {
            Some(node) => self
                .adapter
                .rows_of(node)
                .into_iter()
                .map(|row| RowView::new(self.adapter, row))
                .collect(),
            None => Vec::new(),
        };
        debug!(
            "Located body {:?}: {} rows",
            self.locator,
            self.rows.len()
        );
    }

    pub fn node(&self) -> Option<&A::Node> {
        self.node.as_ref()
    }

    pub fn exists(&self) -> bool {
        self.node.is_some()
    }

    /// Row `index` after locating the body again.
    pub fn row(&mut self, index: usize) -> Result<&RowView<'a, A>> {
        self.locate();
        if self.node.is_none() {
            return Err(TableError::not_found(format!("body by {:?}", self.locator)));
        }
        let len = self.rows.len();
        self.rows.get(index).ok_or(TableError::IndexOutOfRange {
            what: "body row",
            index,
            len,
        })
    }

    /// Locate the body again and iterate over its rows.
    pub fn rows(&mut self) -> std::slice::Iter<'_, RowView<'a, A>> {
        self.locate();
        self.rows.iter()
    }

    /// Row count as of the last location.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<A: DocumentAdapter> fmt::Debug for BodyView<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BodyView")
            .field("locator", &self.locator)
            .field("node", &self.node)
            .field("rows", &self.rows.len())
            .finish()
    }
}

/// The `<tbody>` sections of a table. Reads the document on every call.
pub struct BodyCollection<'a, A: DocumentAdapter> {
    adapter: &'a A,
    table: A::Node,
}

impl<'a, A: DocumentAdapter> BodyCollection<'a, A> {
    pub fn new(adapter: &'a A, table: A::Node) -> Self {
        Self { adapter, table }
    }

    fn body_nodes(&self) -> Result<Vec<A::Node>> {
        if !self.adapter.is_attached(&self.table) {
            return Err(TableError::not_found(format!("table {:?}", self.table)));
        }
        Ok(self.adapter.bodies_of(&self.table))
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.body_nodes()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    pub fn get(&self, index: usize) -> Result<BodyView<'a, A>> {
        let nodes = self.body_nodes()?;
        let len = nodes.len();
        nodes
            .into_iter()
            .nth(index)
            .map(|node| self.view(node))
            .ok_or(TableError::IndexOutOfRange {
                what: "body",
                index,
                len,
            })
    }

    pub fn iter(&self) -> Result<impl Iterator<Item = BodyView<'a, A>> + '_> {
        Ok(self.body_nodes()?.into_iter().map(|node| self.view(node)))
    }

    fn view(&self, node: A::Node) -> BodyView<'a, A> {
        BodyView::new(
            self.adapter,
            BodyLocator::Node(node),
            Some(self.table.clone()),
        )
    }
}

#[cfg(test)]
#[path = "body_tests.rs"]
mod tests;
