//! HTML source to node tree frontend.

use html5ever::tendril::TendrilSink;
use html5ever::{local_name, namespace_url, ns, parse_fragment as parse_html, ParseOpts, QualName};
use htmltex_dom::{Attribute, Element, Node};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Parse an HTML fragment as if it appeared inside `<body>`.
///
/// Comments, doctypes and processing instructions are dropped. Entity
/// references in text and attribute values are already decoded.
pub fn parse_fragment(input: &str) -> Vec<Node> {
    let context = QualName::new(None, ns!(html), local_name!("body"));
    let dom = parse_html(RcDom::default(), ParseOpts::default(), context, Vec::new()).one(input);

    // The tree builder puts fragment content under a synthetic <html> root.
    let document = dom.document.children.borrow();
    let Some(root) = document
        .iter()
        .find(|handle| matches!(handle.data, NodeData::Element { .. }))
    else {
        return Vec::new();
    };
    collect_children(root)
}

fn collect_children(handle: &Handle) -> Vec<Node> {
    let mut nodes: Vec<Node> = Vec::new();
    for child in handle.children.borrow().iter() {
        match convert_handle(child) {
            // html5ever may split a text run around dropped comments
            Some(Node::Text(text)) => {
                if let Some(Node::Text(prev)) = nodes.last_mut() {
                    prev.push_str(&text);
                } else {
                    nodes.push(Node::Text(text));
                }
            }
            Some(node) => nodes.push(node),
            None => {}
        }
    }
    nodes
}

fn convert_handle(handle: &Handle) -> Option<Node> {
    match &handle.data {
        NodeData::Text { contents } => Some(Node::Text(contents.borrow().to_string())),
        NodeData::Element { name, attrs, .. } => {
            let attrs = attrs
                .borrow()
                .iter()
                .map(|attr| Attribute::new(attr.name.local.to_string(), attr.value.to_string()))
                .collect();
            Some(Node::Element(Element {
                name: name.local.to_string().to_ascii_lowercase(),
                attrs,
                children: collect_children(handle),
            }))
        }
        NodeData::Document
        | NodeData::Doctype { .. }
        | NodeData::Comment { .. }
        | NodeData::ProcessingInstruction { .. } => None,
    }
}
