//! Cell view.

use std::fmt;

use tablescope_protocols::DocumentAdapter;

use crate::error::{Result, TableError};

/// One `<td>` or `<th>` element.
///
/// Holds only the handle; every accessor re-reads the node.
pub struct CellView<'a, A: DocumentAdapter> {
    adapter: &'a A,
    node: A::Node,
}

impl<'a, A: DocumentAdapter> CellView<'a, A> {
    pub fn new(adapter: &'a A, node: A::Node) -> Self {
        Self { adapter, node }
    }

    pub fn node(&self) -> &A::Node {
        &self.node
    }

    pub(crate) fn document(&self) -> &'a A {
        self.adapter
    }

    fn assert_exists(&self) -> Result<()> {
        if self.adapter.is_attached(&self.node) {
            Ok(())
        } else {
            Err(TableError::not_found(format!("cell {:?}", self.node)))
        }
    }

    /// Trimmed text of the cell, including text of anything nested in it.
    pub fn text(&self) -> Result<String> {
        self.assert_exists()?;
        Ok(self.adapter.text(&self.node).trim().to_string())
    }

    /// Number of columns the cell spans, at least 1.
    pub fn colspan(&self) -> Result<u32> {
        self.assert_exists()?;
        Ok(self.adapter.column_span(&self.node).max(1))
    }
}

impl<A: DocumentAdapter> Clone for CellView<'_, A> {
    fn clone(&self) -> Self {
        Self {
            adapter: self.adapter,
            node: self.node.clone(),
        }
    }
}

impl<A: DocumentAdapter> fmt::Debug for CellView<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellView").field("node", &self.node).finish()
    }
}
