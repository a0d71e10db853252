//! Inline (text-level) conversion.

use htmltex_dom::{Element, Node, Tag};

use crate::image::convert_image;
use crate::templates::{self, PARAGRAPH_BREAK};
use crate::text::normalize_text;
use crate::RenderContext;

pub fn convert_inline(node: &Node, cx: &RenderContext<'_>) -> String {
    match node {
        Node::Text(text) => normalize_text(text, cx.options()),
        Node::Element(el) => convert_element(el, cx),
    }
}

/// Convert a run of sibling nodes with no separator.
pub fn convert_inlines<'n>(
    nodes: impl IntoIterator<Item = &'n Node>,
    cx: &RenderContext<'_>,
) -> String {
    let mut out = String::new();
    for node in nodes {
        out.push_str(&convert_inline(node, cx));
    }
    out
}

pub fn convert_element(el: &Element, cx: &RenderContext<'_>) -> String {
    let tag = el.tag();
    match tag {
        Tag::Br => {
            return if cx.options().ignore_breaks {
                " ".to_string()
            } else {
                PARAGRAPH_BREAK.to_string()
            };
        }
        Tag::Img => return convert_image(el, cx).unwrap_or_default(),
        _ => {}
    }

    if el.children.is_empty() {
        return String::new();
    }
    let text = convert_inlines(&el.children, cx);
    match tag {
        Tag::B | Tag::Strong => templates::bold(&text),
        Tag::I | Tag::Em => templates::italic(&text),
        Tag::U => templates::underline(&text),
        Tag::S => templates::strikethrough(&text),
        Tag::Sub => templates::subscript(&text),
        Tag::Sup => templates::superscript(&text),
        Tag::A => match el.attr("href") {
            Some(href) => templates::hyperlink(href, &text),
            None => {
                log::debug!("anchor without href, keeping link text only");
                text
            }
        },
        _ => text,
    }
}
