//! Document node adapter trait.

use std::fmt;

/// Lower-case tag names the table views care about.
pub mod tags {
    pub const TABLE: &str = "table";
    pub const TBODY: &str = "tbody";
    pub const THEAD: &str = "thead";
    pub const TFOOT: &str = "tfoot";
    pub const TR: &str = "tr";
    pub const TD: &str = "td";
    pub const TH: &str = "th";
    /// Matches every element in [`DocumentAdapter::descendants_by_tag`](super::DocumentAdapter::descendants_by_tag).
    pub const ANY: &str = "*";
}

/// Read access to a live, externally owned element tree.
///
/// Implementations hand out cheap node handles; the tree itself stays with
/// the implementation and may change between calls. Every method reads the
/// tree at call time.
pub trait DocumentAdapter {
    /// Non-owning handle to one element.
    type Node: Clone + fmt::Debug + PartialEq;

    /// Lower-case tag name of the element.
    fn tag_name(&self, node: &Self::Node) -> String;

    /// Parent element, or `None` at the root or for a detached node.
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Native rows of a table or table section, in document order.
    ///
    /// For a table this is its direct `<tr>` children plus the `<tr>`
    /// children of its direct `<thead>`, `<tbody>` and `<tfoot>` sections.
    /// Rows of nested tables are never included.
    fn rows_of(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Direct `<td>`/`<th>` children of a row.
    fn cells_of(&self, row: &Self::Node) -> Vec<Self::Node>;

    /// Direct `<tbody>` sections of a table.
    fn bodies_of(&self, table: &Self::Node) -> Vec<Self::Node>;

    /// Every element with the given tag at any depth below `node`, in
    /// document order. `node` itself is not included. [`tags::ANY`]
    /// matches every element.
    fn descendants_by_tag(&self, node: &Self::Node, tag: &str) -> Vec<Self::Node>;

    /// Concatenated text of the element and its descendants, untrimmed.
    fn text(&self, node: &Self::Node) -> String;

    /// Column span of a cell, at least 1.
    fn column_span(&self, node: &Self::Node) -> u32;

    /// Whether the handle still refers to a node reachable from the root.
    fn is_attached(&self, node: &Self::Node) -> bool;

    /// Whether two handles refer to the same element.
    fn identity(&self, a: &Self::Node, b: &Self::Node) -> bool {
        a == b
    }

    /// Case-insensitive tag check.
    fn has_tag(&self, node: &Self::Node, tag: &str) -> bool {
        self.tag_name(node).eq_ignore_ascii_case(tag)
    }
}
