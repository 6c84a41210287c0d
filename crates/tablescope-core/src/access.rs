//! Table access from any container element.

use std::fmt;

use tablescope_protocols::{ElementLocator, Locator, tags};

use crate::cell::CellView;
use crate::error::{Result, TableError};
use crate::row::RowView;
use crate::table::TableView;

const CELL_TAGS: &[&str] = &[tags::TD, tags::TH];

/// Tables, rows and cells reachable below a container element.
///
/// Lookups search the whole subtree under [`TableAccessible::scope`],
/// nested tables included. On [`TableView`] the inherent `row`/`rows`
/// address native rows by index and shadow these; call the trait methods
/// as `TableAccessible::row(&table, locator)` there.
pub trait TableAccessible<'a, A: ElementLocator + 'a> {
    fn adapter(&self) -> &'a A;

    /// The element searches start from.
    fn scope(&self) -> Result<A::Node>;

    /// Table below the scope, located when first used.
    fn table(&self, locator: Locator<A::Node>) -> Result<TableView<'a, A>> {
        Ok(TableView::scoped(self.adapter(), Some(self.scope()?), locator))
    }

    /// Every table below the scope, at any depth.
    fn tables(&self) -> Result<Vec<TableView<'a, A>>> {
        let adapter = self.adapter();
        Ok(adapter
            .descendants_by_tag(&self.scope()?, tags::TABLE)
            .into_iter()
            .map(|node| TableView::from_node(adapter, node))
            .collect())
    }

    fn row(&self, locator: Locator<A::Node>) -> Result<RowView<'a, A>> {
        let adapter = self.adapter();
        adapter
            .locate(Some(&self.scope()?), &[tags::TR], &locator)
            .map(|node| RowView::new(adapter, node))
            .ok_or_else(|| TableError::not_found(format!("row by {}", locator)))
    }

    fn rows(&self) -> Result<Vec<RowView<'a, A>>> {
        let adapter = self.adapter();
        Ok(adapter
            .descendants_by_tag(&self.scope()?, tags::TR)
            .into_iter()
            .map(|node| RowView::new(adapter, node))
            .collect())
    }

    fn cell(&self, locator: Locator<A::Node>) -> Result<CellView<'a, A>> {
        let adapter = self.adapter();
        adapter
            .locate(Some(&self.scope()?), CELL_TAGS, &locator)
            .map(|node| CellView::new(adapter, node))
            .ok_or_else(|| TableError::not_found(format!("cell by {}", locator)))
    }

    /// Every `<td>` and `<th>` below the scope, in document order.
    fn cells(&self) -> Result<Vec<CellView<'a, A>>> {
        let adapter = self.adapter();
        Ok(adapter
            .descendants_by_tag(&self.scope()?, tags::ANY)
            .into_iter()
            .filter(|node| CELL_TAGS.iter().any(|tag| adapter.has_tag(node, tag)))
            .map(|node| CellView::new(adapter, node))
            .collect())
    }
}

/// Any element used as a search root, typically the document root.
pub struct Container<'a, A: ElementLocator> {
    adapter: &'a A,
    node: A::Node,
}

impl<'a, A: ElementLocator> Container<'a, A> {
    pub fn new(adapter: &'a A, node: A::Node) -> Self {
        Self { adapter, node }
    }
}

impl<A: ElementLocator> fmt::Debug for Container<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container").field("node", &self.node).finish()
    }
}

impl<'a, A: ElementLocator + 'a> TableAccessible<'a, A> for Container<'a, A> {
    fn adapter(&self) -> &'a A {
        self.adapter
    }

    fn scope(&self) -> Result<A::Node> {
        if self.adapter.is_attached(&self.node) {
            Ok(self.node.clone())
        } else {
            Err(TableError::not_found(format!("container {:?}", self.node)))
        }
    }
}

impl<'a, A: ElementLocator + 'a> TableAccessible<'a, A> for TableView<'a, A> {
    fn adapter(&self) -> &'a A {
        TableView::document(self)
    }

    fn scope(&self) -> Result<A::Node> {
        self.node()
    }
}

impl<'a, A: ElementLocator + 'a> TableAccessible<'a, A> for CellView<'a, A> {
    fn adapter(&self) -> &'a A {
        CellView::document(self)
    }

    fn scope(&self) -> Result<A::Node> {
        let adapter = CellView::document(self);
        if adapter.is_attached(self.node()) {
            Ok(self.node().clone())
        } else {
            Err(TableError::not_found(format!("cell {:?}", self.node())))
        }
    }
}

#[cfg(test)]
#[path = "access_tests.rs"]
mod tests;
