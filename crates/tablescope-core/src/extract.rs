//! Depth-limited extraction of table text.
//!
//! A row becomes the sequence of its cells' contributions, in document
//! order. A cell contributes its trimmed text, unless it holds one or more
//! *direct* nested tables: tables that reach the cell through parent links
//! without passing another table on the way.
//! Each direct table spends one unit of the row's depth budget and is
//! extracted recursively with what remains; once the budget is spent the
//! table is truncated according to [`Truncation`]. The budget runs across
//! the whole row unless [`DepthBudget::PerCell`] is requested.
//!
//! Column and row spans never reshape the output.

use serde::Serialize;
use tracing::{trace, warn};

use tablescope_protocols::{DocumentAdapter, tags};

use crate::error::{Result, TableError};

/// Ceiling on parent-walk steps before a tree is reported as malformed.
pub const DEFAULT_ANCESTOR_LIMIT: usize = 1024;

/// What a cell contributes when its direct nested tables are past the
/// depth budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Truncation {
    /// Nothing: the row gets no entry for that table.
    #[default]
    Omit,
    /// An empty table, keeping one entry per nested table.
    EmptyTable,
}

/// How far the depth budget reaches within a row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DepthBudget {
    /// One running budget for the row: tables in later cells see what
    /// earlier cells spent.
    #[default]
    PerRow,
    /// Every cell starts again from the full depth.
    PerCell,
}

/// Extraction settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Levels of direct nested tables to expand.
    pub max_depth: usize,
    pub truncation: Truncation,
    pub budget: DepthBudget,
    /// Maximum parent-walk steps in direct-child detection.
    pub ancestor_limit: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_depth: 1,
            truncation: Truncation::default(),
            budget: DepthBudget::default(),
            ancestor_limit: DEFAULT_ANCESTOR_LIMIT,
        }
    }
}

impl ExtractOptions {
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    pub fn truncation(mut self, truncation: Truncation) -> Self {
        self.truncation = truncation;
        self
    }

    pub fn budget(mut self, budget: DepthBudget) -> Self {
        self.budget = budget;
        self
    }

    pub fn ancestor_limit(mut self, limit: usize) -> Self {
        self.ancestor_limit = limit;
        self
    }
}

/// One cell's contribution to an extracted row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Table(Vec<Vec<CellValue>>),
}

impl CellValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text.as_str()),
            CellValue::Table(_) => None,
        }
    }

    pub fn as_table(&self) -> Option<&[Vec<CellValue>]> {
        match self {
            CellValue::Table(rows) => Some(rows.as_slice()),
            CellValue::Text(_) => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        CellValue::Text(text.to_string())
    }
}

impl From<Vec<Vec<CellValue>>> for CellValue {
    fn from(rows: Vec<Vec<CellValue>>) -> Self {
        CellValue::Table(rows)
    }
}

/// Stateless walker; holds only the adapter and the settings.
pub(crate) struct Extractor<'a, A: DocumentAdapter> {
    adapter: &'a A,
    options: ExtractOptions,
}

impl<'a, A: DocumentAdapter> Extractor<'a, A> {
    pub(crate) fn new(adapter: &'a A, options: ExtractOptions) -> Self {
        Self { adapter, options }
    }

    /// Native rows of `table`, each extracted with `depth`.
    pub(crate) fn table(&self, table: &A::Node, depth: usize) -> Result<Vec<Vec<CellValue>>> {
        self.adapter
            .rows_of(table)
            .iter()
            .map(|row| self.row(row, depth))
            .collect()
    }

    pub(crate) fn row(&self, row: &A::Node, depth: usize) -> Result<Vec<CellValue>> {
        let mut values = Vec::new();
        let mut remaining = depth;
        for cell in self.adapter.cells_of(row) {
            if self.options.budget == DepthBudget::PerCell {
                remaining = depth;
            }
            self.cell(&cell, &mut remaining, &mut values)?;
        }
        Ok(values)
    }

    fn cell(
        &self,
        cell: &A::Node,
        remaining: &mut usize,
        out: &mut Vec<CellValue>,
    ) -> Result<()> {
        let mut has_direct = false;

        for candidate in self.adapter.descendants_by_tag(cell, tags::TABLE) {
            if !self.is_direct(cell, &candidate)? {
                continue;
            }
            has_direct = true;
            *remaining = remaining.saturating_sub(1);
            if *remaining >= 1 {
                out.push(CellValue::Table(self.table(&candidate, *remaining)?));
            } else {
                trace!("Depth exhausted at {:?} in cell {:?}", candidate, cell);
                if self.options.truncation == Truncation::EmptyTable {
                    out.push(CellValue::Table(Vec::new()));
                }
            }
        }

        if !has_direct {
            out.push(CellValue::Text(self.adapter.text(cell).trim().to_string()));
        }
        Ok(())
    }

    /// Whether `node` reaches `cell` through its parents before meeting any
    /// other table.
    pub(crate) fn is_direct(&self, cell: &A::Node, node: &A::Node) -> Result<bool> {
        let mut current = node.clone();
        for _ in 0..self.options.ancestor_limit {
            let Some(parent) = self.adapter.parent(&current) else {
                warn!("{:?} is not connected to cell {:?}", node, cell);
                return Err(TableError::MalformedStructure(format!(
                    "{:?} has no path to cell {:?}",
                    node, cell
                )));
            };
            if self.adapter.identity(&parent, cell) {
                return Ok(true);
            }
            if self.adapter.has_tag(&parent, tags::TABLE) {
                return Ok(false);
            }
            current = parent;
        }

        warn!(
            "Parent walk from {:?} exceeded {} steps",
            node, self.options.ancestor_limit
        );
        Err(TableError::MalformedStructure(format!(
            "parent walk from {:?} exceeded {} steps",
            node, self.options.ancestor_limit
        )))
    }
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
