//! Table views for Tablescope.
//!
//! Read-only views over the tables of a live document tree. The tree is
//! owned by a [`DocumentAdapter`](tablescope_protocols::DocumentAdapter);
//! views hold a borrowed adapter, a node handle and small private caches.
//!
//! ## Views
//!
//! ```text
//! TableView ──► Rows ──► RowView ──► CellView
//!     │
//!     └──► BodyCollection ──► BodyView ──► RowView
//! ```
//!
//! - [`TableView`] - row/column counts, indexed rows, value projections
//! - [`RowView`] - caches its cells on first access
//! - [`CellView`] - trimmed text and column span
//! - [`BodyView`] / [`BodyCollection`] - per-`<tbody>` row access
//!
//! ## Extraction
//!
//! [`TableView::to_array`] and [`RowView::to_array`] snapshot a table as
//! nested arrays of cell text. A cell holding a table directly (no other
//! table in between) contributes that table's own snapshot instead of its
//! text, as long as the row's depth budget allows.
//!
//! Nothing here writes to the document or retries a failed read.

mod access;
mod body;
mod cell;
mod error;
mod extract;
mod row;
mod table;

pub use access::{Container, TableAccessible};
pub use body::{BodyCollection, BodyLocator, BodyView};
pub use cell::CellView;
pub use error::{Result, TableError};
pub use extract::{CellValue, DEFAULT_ANCESTOR_LIMIT, DepthBudget, ExtractOptions, Truncation};
pub use row::RowView;
pub use table::{Rows, TableSummary, TableView};

#[cfg(test)]
mod fixtures;
