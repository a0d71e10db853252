//! `<table>` to `tabular`.

use htmltex_dom::{Element, Tag};

use crate::inline::convert_inlines;
use crate::templates;
use crate::RenderContext;

const SECTIONS: [Tag; 3] = [Tag::Thead, Tag::Tbody, Tag::Tfoot];
const CELLS: [Tag; 2] = [Tag::Td, Tag::Th];

/// Render a table. `None` when it has no rows.
pub fn convert_table(el: &Element, cx: &RenderContext<'_>) -> Option<String> {
    let rows: Vec<Vec<String>> = table_rows(el)
        .into_iter()
        .map(|row| {
            row.children_tagged(&CELLS)
                .map(|cell| convert_inlines(&cell.children, cx).trim().to_string())
                .collect()
        })
        .collect();

    let columns = rows.first().map(Vec::len)?;
    if columns == 0 {
        return None;
    }
    let rendered: Vec<String> = rows.iter().map(|cells| cells.join(" & ")).collect();
    Some(templates::tabular(columns, &rendered))
}

/// Rows in document order.
///
/// Rows may sit directly under the table or inside `thead`/`tbody`/`tfoot`;
/// html5ever always wraps bare rows in a synthesized `tbody`.
fn table_rows(el: &Element) -> Vec<&Element> {
    let mut rows = Vec::new();
    for child in el.child_elements() {
        match child.tag() {
            Tag::Tr => rows.push(child),
            tag if SECTIONS.contains(&tag) => rows.extend(child.children_tagged(&[Tag::Tr])),
            _ => {}
        }
    }
    rows
}
