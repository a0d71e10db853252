//! HTML node tree to LaTeX backend.

use std::path::{Path, PathBuf};

use htmltex_dom::{Element, Node, Tag};

pub mod blocks;
pub mod document;
pub mod fetch;
pub mod image;
pub mod inline;
mod options;
pub mod table;
pub mod templates;
pub mod text;

pub use document::infer_packages;
pub use fetch::{FetchError, ImageFetcher, NoopFetcher};
pub use inline::convert_inline;
pub use options::ConversionOptions;
pub use text::{escape_latex, normalize_text};

/// Everything a conversion call reads: options, the resolved compilation
/// directory and the side-effecting collaborators.
pub struct RenderContext<'a> {
    options: &'a ConversionOptions,
    compilation_dir: PathBuf,
    fetcher: &'a dyn ImageFetcher,
    id_source: fn() -> String,
}

impl<'a> RenderContext<'a> {
    /// Resolves the compilation directory once for the whole walk.
    pub fn new(options: &'a ConversionOptions, fetcher: &'a dyn ImageFetcher) -> Self {
        Self {
            options,
            compilation_dir: options.resolve_compilation_dir(),
            fetcher,
            id_source: image::generate_short_id,
        }
    }

    /// Replace the generator used for auto-generated image names.
    pub fn with_id_source(mut self, id_source: fn() -> String) -> Self {
        self.id_source = id_source;
        self
    }

    pub fn options(&self) -> &ConversionOptions {
        self.options
    }

    pub fn compilation_dir(&self) -> &Path {
        &self.compilation_dir
    }

    pub fn fetcher(&self) -> &dyn ImageFetcher {
        self.fetcher
    }

    pub fn id_source(&self) -> fn() -> String {
        self.id_source
    }
}

/// Convert a parsed fragment, adding the document wrapper when requested.
///
/// `include_packages` is used as given; callers that want inference fill it
/// from [`infer_packages`] first.
pub fn convert(nodes: &[Node], cx: &RenderContext<'_>) -> String {
    let blocks = document::wrap_document(convert_blocks(nodes, cx), cx.options());
    join_blocks(blocks)
}

/// Convert sibling nodes without any document wrapper.
pub fn convert_nodes(nodes: &[Node], cx: &RenderContext<'_>) -> String {
    join_blocks(convert_blocks(nodes, cx))
}

fn join_blocks(blocks: Vec<String>) -> String {
    blocks
        .into_iter()
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

enum WalkState<'n> {
    AccumulatingInline(Vec<&'n Node>),
    EmittingBlock,
}

/// Walk siblings, grouping consecutive inline nodes into one trimmed block.
fn convert_blocks(nodes: &[Node], cx: &RenderContext<'_>) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut state = WalkState::EmittingBlock;

    for node in nodes {
        let block = node.as_element().filter(|el| el.tag().is_block());
        state = match (state, block) {
            (WalkState::AccumulatingInline(mut run), None) => {
                run.push(node);
                WalkState::AccumulatingInline(run)
            }
            (WalkState::EmittingBlock, None) => WalkState::AccumulatingInline(vec![node]),
            (previous, Some(el)) => {
                if let WalkState::AccumulatingInline(run) = previous {
                    blocks.push(flush_inline_run(&run, cx));
                }
                if let Some(rendered) = convert_block(el, cx) {
                    blocks.push(rendered);
                }
                WalkState::EmittingBlock
            }
        };
    }
    if let WalkState::AccumulatingInline(run) = state {
        blocks.push(flush_inline_run(&run, cx));
    }
    blocks
}

fn flush_inline_run(run: &[&Node], cx: &RenderContext<'_>) -> String {
    inline::convert_inlines(run.iter().copied(), cx).trim().to_string()
}

fn convert_block(el: &Element, cx: &RenderContext<'_>) -> Option<String> {
    let tag = el.tag();
    log::trace!("block <{}>", el.name);
    match tag {
        Tag::H1 | Tag::H2 | Tag::H3 | Tag::H4 | Tag::H5 | Tag::H6 => {
            Some(blocks::convert_heading(el, cx))
        }
        Tag::Ul | Tag::Ol => blocks::convert_list_block(el, cx),
        Tag::Img => image::convert_image(el, cx),
        Tag::Hr => Some(templates::DIVIDER.to_string()),
        Tag::Div
        | Tag::Section
        | Tag::Body
        | Tag::Html
        | Tag::Header
        | Tag::Footer
        | Tag::Aside
        | Tag::Main => Some(convert_nodes(&el.children, cx)),
        Tag::P => Some(blocks::convert_paragraph(el, cx)),
        Tag::Table if el.children.is_empty() => None,
        Tag::Table => table::convert_table(el, cx),
        Tag::Code => Some(blocks::convert_code(el, cx)),
        _ => Some(inline::convert_element(el, cx).trim().to_string()),
    }
}

#[cfg(test)]
mod tests;
