//! HTML fixtures shared by the view tests.

use tablescope_dom::HtmlDocument;
use tablescope_protocols::Locator;

use crate::table::TableView;

/// 2x2 flat table.
pub(crate) const FLAT: &str = r#"
<table id="flat">
  <tr><td>a</td><td> b </td></tr>
  <tr><td>c</td><td>d</td></tr>
</table>
"#;

/// Outer cell (0,0) holds table `a`, whose cell (0,0) holds table `b`
/// inside a div. Cell (1,1) of the outer table holds `c` next to text.
pub(crate) const NESTED: &str = r#"
<table id="outer">
  <tr>
    <td><table id="a">
      <tr><td><div><table id="b"><tr><td>deep</td></tr></table></div></td><td>a2</td></tr>
    </table></td>
    <td>o2</td>
  </tr>
  <tr>
    <td colspan="2">o3</td>
    <td>label <table id="c"><tr><td>c1</td><td>c2</td></tr></table></td>
  </tr>
</table>
"#;

/// Two explicit bodies and a header section.
pub(crate) const SECTIONS: &str = r#"
<table id="sections">
  <thead><tr><th>Name</th><th>Qty</th></tr></thead>
  <tbody id="first">
    <tr><td>apples</td><td>3</td></tr>
    <tr><td>pears</td><td>5</td></tr>
  </tbody>
  <tbody id="second">
    <tr><td>plums</td></tr>
  </tbody>
</table>
"#;

pub(crate) fn table<'a>(doc: &'a HtmlDocument, id: &str) -> TableView<'a, HtmlDocument> {
    TableView::new(doc, Locator::id(id))
}
