use super::*;

use tablescope_dom::HtmlDocument;

use crate::access::TableAccessible;
use crate::cell::CellView;
use crate::extract::DEFAULT_ANCESTOR_LIMIT;

use crate::fixtures::{FLAT, NESTED, SECTIONS, table};

#[test]
fn test_locate_by_index_and_id() {
    let doc = HtmlDocument::parse(NESTED);
    let by_index = TableView::new(&doc, Locator::Index(1));
    let by_id = table(&doc, "a");
    assert_eq!(by_index.node().unwrap(), by_id.node().unwrap());
}

#[test]
fn test_missing_table() {
    let doc = HtmlDocument::parse(FLAT);
    let view = table(&doc, "nope");
    assert!(!view.exists());
    assert!(matches!(view.row_count(), Err(TableError::ElementNotFound(_))));
}

#[test]
fn test_row_counts() {
    let doc = HtmlDocument::parse(NESTED);
    let outer = table(&doc, "outer");
    assert_eq!(outer.row_count().unwrap(), 5);
    assert_eq!(outer.row_count_excluding_nested().unwrap(), 2);
    assert!(outer.row_count().unwrap() > outer.row_count_excluding_nested().unwrap());
}

#[test]
fn test_row_counts_match_without_nested_tables() {
    let doc = HtmlDocument::parse(FLAT);
    let flat = table(&doc, "flat");
    assert_eq!(
        flat.row_count().unwrap(),
        flat.row_count_excluding_nested().unwrap()
    );

    let doc = HtmlDocument::parse(SECTIONS);
    let sections = table(&doc, "sections");
    assert_eq!(
        sections.row_count().unwrap(),
        sections.row_count_excluding_nested().unwrap()
    );
}

#[test]
fn test_native_rows_span_sections() {
    let doc = HtmlDocument::parse(SECTIONS);
    let view = table(&doc, "sections");
    assert_eq!(view.row_count_excluding_nested().unwrap(), 4);
    assert_eq!(view.row_values(3).unwrap(), vec!["plums"]);
}

#[test]
fn test_row_index_out_of_range() {
    let doc = HtmlDocument::parse(FLAT);
    let err = table(&doc, "flat").row(5).unwrap_err();
    assert_eq!(
        err,
        TableError::IndexOutOfRange {
            what: "row",
            index: 5,
            len: 2
        }
    );
}

#[test]
fn test_column_count() {
    let doc = HtmlDocument::parse(SECTIONS);
    let view = table(&doc, "sections");
    assert_eq!(view.column_count(0).unwrap(), 2);
    assert_eq!(view.column_count(3).unwrap(), 1);
    assert_eq!(
        view.column_count(4).unwrap_err(),
        TableError::IndexOutOfRange {
            what: "row",
            index: 4,
            len: 4
        }
    );
}

#[test]
fn test_rows_is_lazy_and_restartable() {
    let doc = HtmlDocument::parse(FLAT);
    let view = table(&doc, "flat");

    let rows = view.rows().unwrap();
    assert_eq!(rows.len(), 2);
    let firsts: Vec<String> = rows
        .map(|row| row.cell_at(0).and_then(CellView::text).unwrap())
        .collect();
    assert_eq!(firsts, vec!["a", "c"]);

    let second = view.row(1).unwrap();
    assert!(doc.detach(*second.node()));
    assert_eq!(view.rows().unwrap().count(), 1);
}

#[test]
fn test_column_and_row_values() {
    let doc = HtmlDocument::parse(FLAT);
    let view = table(&doc, "flat");
    assert_eq!(view.column_values(1).unwrap(), vec!["b", "d"]);
    assert_eq!(view.row_values(1).unwrap(), vec!["c", "d"]);
    assert!(matches!(
        view.row_values(2),
        Err(TableError::IndexOutOfRange { what: "row", .. })
    ));
}

#[test]
fn test_column_values_include_nested_text() {
    let doc = HtmlDocument::parse(NESTED);
    let view = table(&doc, "outer");
    assert_eq!(view.column_values(1).unwrap(), vec!["o2", "label c1c2"]);
    assert_eq!(
        view.column_values(2).unwrap_err(),
        TableError::UnknownCell { index: 2, len: 2 }
    );
}

#[test]
fn test_stale_handle_is_located_again() {
    let doc = HtmlDocument::parse(NESTED);
    let view = TableView::new(&doc, Locator::Index(0));
    let outer = view.node().unwrap();
    assert_eq!(view.row_count_excluding_nested().unwrap(), 2);

    assert!(doc.detach(outer));
    assert!(matches!(view.node(), Err(TableError::ElementNotFound(_))));

    // An explicit handle stays gone.
    let pinned = TableView::from_node(&doc, outer);
    assert!(!pinned.exists());
}

#[test]
fn test_relocate_follows_the_locator() {
    let doc = HtmlDocument::parse(
        "<table id='x'><tr><td>1</td></tr></table><table><tr><td>2</td></tr></table>",
    );
    let view = TableView::new(&doc, Locator::Index(0));
    let first = view.node().unwrap();
    assert_eq!(view.row_values(0).unwrap(), vec!["1"]);

    assert!(doc.detach(first));
    view.relocate();
    assert_eq!(view.row_values(0).unwrap(), vec!["2"]);
}

#[test]
fn test_scoped_lookup() {
    let doc = HtmlDocument::parse(NESTED);
    let outer = table(&doc, "outer").node().unwrap();
    let first_nested = TableView::scoped(&doc, Some(outer), Locator::Index(0));
    assert_eq!(first_nested.node().unwrap(), table(&doc, "a").node().unwrap());
}

#[test]
fn test_enclosing() {
    let doc = HtmlDocument::parse(NESTED);
    let deep = TableAccessible::cell(&table(&doc, "b"), Locator::Index(0)).unwrap();
    let enclosing = TableView::enclosing(&doc, deep.node(), DEFAULT_ANCESTOR_LIMIT).unwrap();
    assert_eq!(enclosing.node().unwrap(), table(&doc, "b").node().unwrap());

    let err = TableView::enclosing(&doc, &doc.root(), DEFAULT_ANCESTOR_LIMIT).unwrap_err();
    assert!(matches!(err, TableError::ElementNotFound(_)));
}

#[test]
fn test_enclosing_respects_ancestor_limit() {
    let doc = HtmlDocument::parse(FLAT);
    let cell = TableAccessible::cell(&table(&doc, "flat"), Locator::Index(0)).unwrap();

    // cell -> tr -> tbody -> table
    let err = TableView::enclosing(&doc, cell.node(), 2).unwrap_err();
    assert!(matches!(err, TableError::MalformedStructure(_)));

    let found = TableView::enclosing(&doc, cell.node(), 3).unwrap();
    assert_eq!(found.node().unwrap(), table(&doc, "flat").node().unwrap());
}

#[test]
fn test_summary() {
    let doc = HtmlDocument::parse(NESTED);
    let summary = table(&doc, "outer").summary().unwrap();
    assert_eq!(
        summary,
        TableSummary {
            rows: 5,
            rows_excluding_nested: 2,
            columns: 2
        }
    );
    let text = summary.to_string();
    assert!(text.contains("rows:       5"));
    assert!(text.contains("own rows:   2"));
    assert!(text.contains("cols:       2"));
}

#[test]
fn test_summary_of_empty_table() {
    let doc = HtmlDocument::parse("<table id='e'></table>");
    let summary = table(&doc, "e").summary().unwrap();
    assert_eq!(summary.columns, 0);
    assert_eq!(summary.rows, 0);
}

#[test]
fn test_body_by_index() {
    let doc = HtmlDocument::parse(SECTIONS);
    let view = table(&doc, "sections");
    let mut body = view.body(BodyLocator::Index(1));
    assert!(body.exists());
    assert_eq!(body.row(0).unwrap().values().unwrap(), vec!["plums"]);
    assert_eq!(view.bodies().unwrap().len().unwrap(), 2);
}
