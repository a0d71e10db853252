//! Headings, paragraphs, lists and code listings.

use htmltex_dom::{Element, Tag};
use lazy_static::lazy_static;
use regex::Regex;

use crate::inline::convert_inlines;
use crate::templates;
use crate::{convert_nodes, RenderContext};

lazy_static! {
    /// Text that opens with `$` or `\(` and closes with `$` or `\)`.
    static ref SOLE_EQUATION: Regex = Regex::new(r"(?s)^(?:\$|\\\()(.*)(?:\$|\\\))$").unwrap();
}

pub fn convert_heading(el: &Element, cx: &RenderContext<'_>) -> String {
    let text = convert_inlines(&el.children, cx);
    let text = text.trim();
    match el.tag() {
        Tag::H1 => templates::section(text),
        Tag::H2 => templates::subsection(text),
        _ => templates::subsubsection(text),
    }
}

pub fn convert_paragraph(el: &Element, cx: &RenderContext<'_>) -> String {
    let text = convert_inlines(&el.children, cx);
    let text = text.trim();
    if cx.options().skip_wrapping_equations {
        return text.to_string();
    }
    wrap_sole_equation(text)
}

/// Promote a paragraph made of one inline equation to display math.
///
/// Works on the rendered text only. A `$` left between the outer delimiters
/// means the paragraph is not a single equation and it is returned as is.
pub fn wrap_sole_equation(text: &str) -> String {
    let Some(caps) = SOLE_EQUATION.captures(text) else {
        return text.to_string();
    };
    let interior = &caps[1];
    if interior.contains('$') {
        return text.to_string();
    }
    format!("\\[{}\\]", interior)
}

/// Render each `li` child through the block walker. Other children are dropped.
pub fn convert_list(el: &Element, cx: &RenderContext<'_>) -> Vec<String> {
    el.children_tagged(&[Tag::Li])
        .map(|li| templates::item(&convert_nodes(&li.children, cx)))
        .collect()
}

/// `ul`/`ol` block; `None` for a list without items.
pub fn convert_list_block(el: &Element, cx: &RenderContext<'_>) -> Option<String> {
    let items = convert_list(el, cx);
    if items.is_empty() {
        return None;
    }
    Some(match el.tag() {
        Tag::Ol => templates::enumerate(&items),
        _ => templates::itemize(&items),
    })
}

pub fn convert_code(el: &Element, cx: &RenderContext<'_>) -> String {
    templates::listing(&convert_inlines(&el.children, cx))
}
