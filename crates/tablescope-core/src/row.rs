//! Row view.

use std::cell::OnceCell;
use std::fmt;

use tracing::debug;

use tablescope_protocols::DocumentAdapter;

use crate::cell::CellView;
use crate::error::{Result, TableError};
use crate::extract::{CellValue, ExtractOptions, Extractor};

/// One `<tr>` element.
///
/// The cell list is read from the document on first access and kept for
/// the life of the view. Call [`RowView::reload`] or take a fresh view to
/// see later changes to the row.
pub struct RowView<'a, A: DocumentAdapter> {
    adapter: &'a A,
    node: A::Node,
    cells: OnceCell<Vec<CellView<'a, A>>>,
}

impl<'a, A: DocumentAdapter> RowView<'a, A> {
    pub fn new(adapter: &'a A, node: A::Node) -> Self {
        Self {
            adapter,
            node,
            cells: OnceCell::new(),
        }
    }

    pub fn node(&self) -> &A::Node {
        &self.node
    }

    /// Drop the cached cells; the next access reads them again.
    pub fn reload(&mut self) {
        self.cells = OnceCell::new();
    }

    fn assert_exists(&self) -> Result<()> {
        if self.adapter.is_attached(&self.node) {
            Ok(())
        } else {
            Err(TableError::not_found(format!("row {:?}", self.node)))
        }
    }

    fn cached_cells(&self) -> &[CellView<'a, A>] {
        self.cells.get_or_init(|| {
            let cells: Vec<_> = self
                .adapter
                .cells_of(&self.node)
                .into_iter()
                .map(|cell| CellView::new(self.adapter, cell))
                .collect();
            debug!("Materialised {} cells for row {:?}", cells.len(), self.node);
            cells
        })
    }

    /// Cell at `index`; `UnknownCell` past the end of the row.
    pub fn cell_at(&self, index: usize) -> Result<&CellView<'a, A>> {
        self.assert_exists()?;
        let cells = self.cached_cells();
        cells.get(index).ok_or(TableError::UnknownCell {
            index,
            len: cells.len(),
        })
    }

    /// Iterate over the cells in document order.
    pub fn cells(&self) -> Result<std::slice::Iter<'_, CellView<'a, A>>> {
        self.assert_exists()?;
        Ok(self.cached_cells().iter())
    }

    pub fn column_count(&self) -> Result<usize> {
        self.assert_exists()?;
        Ok(self.cached_cells().len())
    }

    /// Trimmed text of every cell.
    pub fn values(&self) -> Result<Vec<String>> {
        self.cells()?.map(CellView::text).collect()
    }

    /// Snapshot of the row, expanding direct nested tables up to
    /// `max_depth` levels.
    pub fn to_array(&self, max_depth: usize) -> Result<Vec<CellValue>> {
        self.extract(&ExtractOptions::with_depth(max_depth))
    }

    pub fn extract(&self, options: &ExtractOptions) -> Result<Vec<CellValue>> {
        self.assert_exists()?;
        Extractor::new(self.adapter, *options).row(&self.node, options.max_depth)
    }
}

impl<A: DocumentAdapter> fmt::Debug for RowView<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowView")
            .field("node", &self.node)
            .field("cached_cells", &self.cells.get().map(Vec::len))
            .finish()
    }
}

#[cfg(test)]
#[path = "row_tests.rs"]
mod tests;
