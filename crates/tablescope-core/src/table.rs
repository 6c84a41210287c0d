//! Table view.

use std::cell::RefCell;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use tablescope_protocols::{DocumentAdapter, ElementLocator, Locator, tags};

use crate::body::{BodyCollection, BodyLocator, BodyView};
use crate::error::{Result, TableError};
use crate::extract::{CellValue, ExtractOptions, Extractor};
use crate::row::RowView;

/// Label width used by the summary listing.
const LABEL_WIDTH: usize = 12;

/// One `<table>` element, identified by a locator and resolved on use.
///
/// The resolved handle is cached and checked for staleness on every call;
/// a handle that is no longer attached is located again.
pub struct TableView<'a, A: ElementLocator> {
    adapter: &'a A,
    scope: Option<A::Node>,
    locator: Locator<A::Node>,
    resolved: RefCell<Option<A::Node>>,
}

impl<'a, A: ElementLocator> TableView<'a, A> {
    /// Table identified by `locator` anywhere in the document.
    pub fn new(adapter: &'a A, locator: Locator<A::Node>) -> Self {
        Self::scoped(adapter, None, locator)
    }

    /// Table identified by `locator` below `scope`.
    pub fn scoped(adapter: &'a A, scope: Option<A::Node>, locator: Locator<A::Node>) -> Self {
        Self {
            adapter,
            scope,
            locator,
            resolved: RefCell::new(None),
        }
    }

    /// Table for an explicit handle.
    pub fn from_node(adapter: &'a A, node: A::Node) -> Self {
        Self::new(adapter, Locator::Node(node))
    }

    /// Table containing `element`: its nearest table ancestor, found within
    /// `ancestor_limit` parent steps.
    pub fn enclosing(
        adapter: &'a A,
        element: &A::Node,
        ancestor_limit: usize,
    ) -> Result<Self> {
        let mut current = element.clone();
        for _ in 0..ancestor_limit {
            match adapter.parent(&current) {
                Some(parent) if adapter.has_tag(&parent, tags::TABLE) => {
                    return Ok(Self::from_node(adapter, parent));
                }
                Some(parent) => current = parent,
                None => {
                    return Err(TableError::not_found(format!(
                        "table enclosing {:?}",
                        element
                    )));
                }
            }
        }
        Err(TableError::MalformedStructure(format!(
            "parent walk from {:?} exceeded {} steps",
            element, ancestor_limit
        )))
    }

    pub fn locator(&self) -> &Locator<A::Node> {
        &self.locator
    }

    pub(crate) fn document(&self) -> &'a A {
        self.adapter
    }

    /// Resolved table handle; `ElementNotFound` if the table is gone.
    pub fn node(&self) -> Result<A::Node> {
        let cached = self.resolved.borrow().clone();
        if let Some(node) = cached {
            if self.adapter.is_attached(&node) {
                return Ok(node);
            }
            debug!("Cached table {:?} is stale, locating again", node);
        }

        let node = self
            .adapter
            .locate(self.scope.as_ref(), &[tags::TABLE], &self.locator)
            .ok_or_else(|| TableError::not_found(format!("table by {}", self.locator)))?;
        *self.resolved.borrow_mut() = Some(node.clone());
        Ok(node)
    }

    /// Forget the resolved handle.
    pub fn relocate(&self) {
        self.resolved.borrow_mut().take();
    }

    pub fn exists(&self) -> bool {
        self.node().is_ok()
    }

    fn native_rows(&self) -> Result<Vec<A::Node>> {
        let node = self.node()?;
        Ok(self.adapter.rows_of(&node))
    }

    /// Rows at any depth, including rows of nested tables.
    pub fn row_count(&self) -> Result<usize> {
        let node = self.node()?;
        Ok(self.adapter.descendants_by_tag(&node, tags::TR).len())
    }

    /// Rows owned by this table, excluding rows of nested tables.
    pub fn row_count_excluding_nested(&self) -> Result<usize> {
        Ok(self.native_rows()?.len())
    }

    /// Number of cells in the native row at `row_index`.
    pub fn column_count(&self, row_index: usize) -> Result<usize> {
        self.row(row_index)?.column_count()
    }

    /// Native row at `index`.
    pub fn row(&self, index: usize) -> Result<RowView<'a, A>> {
        let rows = self.native_rows()?;
        let len = rows.len();
        rows.into_iter()
            .nth(index)
            .map(|row| RowView::new(self.adapter, row))
            .ok_or(TableError::IndexOutOfRange {
                what: "row",
                index,
                len,
            })
    }

    /// Native rows in document order. Each call reads the table again.
    pub fn rows(&self) -> Result<Rows<'a, A>> {
        let rows = self.native_rows()?;
        debug!("Iterating {} rows of table {}", rows.len(), self.locator);
        Ok(Rows {
            adapter: self.adapter,
            nodes: rows.into_iter(),
        })
    }

    /// Snapshot of the table, expanding direct nested tables up to
    /// `max_depth` levels.
    pub fn to_array(&self, max_depth: usize) -> Result<Vec<Vec<CellValue>>> {
        self.extract(&ExtractOptions::with_depth(max_depth))
    }

    pub fn extract(&self, options: &ExtractOptions) -> Result<Vec<Vec<CellValue>>> {
        let node = self.node()?;
        Extractor::new(self.adapter, *options).table(&node, options.max_depth)
    }

    /// Body identified by `locator`. The body is located when created and
    /// again on each row access.
    pub fn body(&self, locator: BodyLocator<A::Node>) -> BodyView<'a, A> {
        BodyView::new(self.adapter, locator, self.node().ok())
    }

    pub fn bodies(&self) -> Result<BodyCollection<'a, A>> {
        Ok(BodyCollection::new(self.adapter, self.node()?))
    }

    /// Text of cell `column_index` from every native row.
    pub fn column_values(&self, column_index: usize) -> Result<Vec<String>> {
        self.rows()?
            .map(|row| {
                let cell = row.cell_at(column_index)?;
                cell.text()
            })
            .collect()
    }

    /// Text of every cell in the native row at `row_index`.
    pub fn row_values(&self, row_index: usize) -> Result<Vec<String>> {
        self.row(row_index)?.values()
    }

    pub fn summary(&self) -> Result<TableSummary> {
        let rows_excluding_nested = self.row_count_excluding_nested()?;
        let columns = if rows_excluding_nested == 0 {
            0
        } else {
            self.column_count(0)?
        };
        Ok(TableSummary {
            rows: self.row_count()?,
            rows_excluding_nested,
            columns,
        })
    }
}

impl<A: ElementLocator> fmt::Debug for TableView<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableView")
            .field("locator", &self.locator)
            .field("scope", &self.scope)
            .field("resolved", &self.resolved.borrow())
            .finish()
    }
}

/// Lazy sequence of native rows.
///
/// Row handles are captured when the sequence starts; each [`RowView`] is
/// built when it is reached.
pub struct Rows<'a, A: DocumentAdapter> {
    adapter: &'a A,
    nodes: std::vec::IntoIter<A::Node>,
}

impl<'a, A: DocumentAdapter> Iterator for Rows<'a, A> {
    type Item = RowView<'a, A>;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| RowView::new(self.adapter, node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<A: DocumentAdapter> ExactSizeIterator for Rows<'_, A> {}

/// Row and column counts of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    /// Rows at any depth, nested tables included.
    pub rows: usize,
    /// Rows owned by the table itself.
    pub rows_excluding_nested: usize,
    /// Cells in the first own row.
    pub columns: usize,
}

impl fmt::Display for TableSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<width$}{}", "rows:", self.rows, width = LABEL_WIDTH)?;
        writeln!(
            f,
            "{:<width$}{}",
            "own rows:",
            self.rows_excluding_nested,
            width = LABEL_WIDTH
        )?;
        write!(f, "{:<width$}{}", "cols:", self.columns, width = LABEL_WIDTH)
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
