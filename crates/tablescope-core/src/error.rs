//! Table view errors.

use thiserror::Error;

/// Result alias used by every view operation.
pub type Result<T> = std::result::Result<T, TableError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The table, row, body or cell cannot be resolved.
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// A numeric row or body index is past the current count.
    #[error("Index out of range: {what} {index} (count {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// A row has fewer cells than the requested column.
    #[error("Unable to locate a cell at index {index} (row has {len} cells)")]
    UnknownCell { index: usize, len: usize },

    /// A parent walk did not terminate or left the tree.
    #[error("Malformed structure: {0}")]
    MalformedStructure(String),
}

impl TableError {
    pub(crate) fn not_found(what: impl Into<String>) -> Self {
        TableError::ElementNotFound(what.into())
    }
}
