use super::*;

use tablescope_dom::HtmlDocument;

use crate::fixtures::{FLAT, NESTED, SECTIONS, table};

#[test]
fn test_cell_at_and_values() {
    let doc = HtmlDocument::parse(FLAT);
    let row = table(&doc, "flat").row(0).unwrap();

    assert_eq!(row.column_count().unwrap(), 2);
    assert_eq!(row.cell_at(1).unwrap().text().unwrap(), "b");
    assert_eq!(row.values().unwrap(), vec!["a", "b"]);
}

#[test]
fn test_unknown_cell() {
    let doc = HtmlDocument::parse(FLAT);
    let row = table(&doc, "flat").row(1).unwrap();

    let err = row.cell_at(2).unwrap_err();
    assert_eq!(err, TableError::UnknownCell { index: 2, len: 2 });
}

#[test]
fn test_header_cells_are_cells() {
    let doc = HtmlDocument::parse(SECTIONS);
    let row = table(&doc, "sections").row(0).unwrap();
    assert_eq!(row.values().unwrap(), vec!["Name", "Qty"]);
}

#[test]
fn test_colspan_is_reported_not_expanded() {
    let doc = HtmlDocument::parse(NESTED);
    let row = table(&doc, "outer").row(1).unwrap();

    assert_eq!(row.column_count().unwrap(), 2);
    assert_eq!(row.cell_at(0).unwrap().colspan().unwrap(), 2);
    assert_eq!(row.cell_at(1).unwrap().colspan().unwrap(), 1);
}

#[test]
fn test_cells_iterate_in_order() {
    let doc = HtmlDocument::parse(FLAT);
    let row = table(&doc, "flat").row(1).unwrap();
    let texts: Vec<String> = row.cells().unwrap().map(|c| c.text().unwrap()).collect();
    assert_eq!(texts, vec!["c", "d"]);
}

#[test]
fn test_row_extract() {
    let doc = HtmlDocument::parse(NESTED);
    let row = table(&doc, "outer").row(1).unwrap();
    let values = row.to_array(2).unwrap();
    assert_eq!(values[0], CellValue::from("o3"));
    assert_eq!(
        values[1],
        CellValue::from(vec![vec![CellValue::from("c1"), CellValue::from("c2")]])
    );
}

#[test]
fn test_cached_cells_until_reload() {
    let doc = HtmlDocument::parse(FLAT);
    let mut row = table(&doc, "flat").row(0).unwrap();
    let first = *row.cell_at(0).unwrap().node();
    assert_eq!(row.column_count().unwrap(), 2);

    assert!(doc.detach(first));
    // The cached list still holds the detached cell.
    assert_eq!(row.column_count().unwrap(), 2);
    assert!(matches!(
        row.cell_at(0).unwrap().text(),
        Err(TableError::ElementNotFound(_))
    ));

    row.reload();
    assert_eq!(row.column_count().unwrap(), 1);
    assert_eq!(row.values().unwrap(), vec!["b"]);
}

#[test]
fn test_detached_row_is_not_found() {
    let doc = HtmlDocument::parse(FLAT);
    let row = table(&doc, "flat").row(0).unwrap();
    assert!(doc.detach(*row.node()));

    assert!(matches!(row.cell_at(0), Err(TableError::ElementNotFound(_))));
    assert!(matches!(row.values(), Err(TableError::ElementNotFound(_))));
    assert!(matches!(row.to_array(1), Err(TableError::ElementNotFound(_))));
}
