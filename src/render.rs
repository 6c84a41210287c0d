//! Text and JSON rendering of command output.

use serde::Serialize;

use tablescope_core::CellValue;

/// Separator between cells on a text row.
const CELL_SEPARATOR: &str = " | ";

/// One line per row, cells separated by ` | `.
pub(crate) fn rows_to_text(rows: &[Vec<CellValue>]) -> String {
    rows.iter()
        .map(|row| row_to_text(row))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn row_to_text(row: &[CellValue]) -> String {
    row.iter()
        .map(value_to_text)
        .collect::<Vec<_>>()
        .join(CELL_SEPARATOR)
}

/// Nested tables render inline as `[cell, cell; cell, cell]`.
fn value_to_text(value: &CellValue) -> String {
    match value {
        CellValue::Text(text) => text.clone(),
        CellValue::Table(rows) => {
            let inner: Vec<String> = rows
                .iter()
                .map(|row| row.iter().map(value_to_text).collect::<Vec<_>>().join(", "))
                .collect();
            format!("[{}]", inner.join("; "))
        }
    }
}

pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
