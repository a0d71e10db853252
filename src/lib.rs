//! # htmltex
//!
//! Convert HTML fragments (rich-text editor output, mostly) into LaTeX.
//!
//! The pipeline is split over three crates:
//! - `htmltex-dom`: the owned node tree
//! - `htmltex-html-frontend`: html5ever fragment parsing into that tree
//! - `htmltex-latex-backend`: the block walker, inline converters and templates
//!
//! This crate ties them together and adds the filesystem and network side.
//!
//! ## Example
//!
//! ```rust
//! use htmltex::{convert_text, ConversionOptions};
//!
//! let latex = convert_text("<h2>Intro</h2><p>Some <b>bold</b> text</p>", &ConversionOptions::default());
//! assert_eq!(latex, "\\subsection*{Intro}\n\nSome \\textbf{bold} text");
//! ```

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

pub mod config;
pub mod fetch;
pub mod utils;

pub use config::{load_options, parse_options};
pub use fetch::HttpFetcher;
pub use htmltex_dom::{Attribute, Element, Node, Tag};
pub use htmltex_html_frontend::parse_fragment;
pub use htmltex_latex_backend::{
    escape_latex, infer_packages, normalize_text, ConversionOptions, FetchError, ImageFetcher,
    NoopFetcher, RenderContext,
};
pub use utils::error::{ConversionError, ConversionResult};

/// Convert an HTML fragment, downloading remote images over HTTP.
pub fn convert_text(html: &str, options: &ConversionOptions) -> String {
    convert_text_with_fetcher(html, options, &HttpFetcher::new())
}

/// Convert an HTML fragment with a caller-supplied image fetcher.
///
/// When `include_packages` is unset the package list is inferred from the
/// source text.
pub fn convert_text_with_fetcher(
    html: &str,
    options: &ConversionOptions,
    fetcher: &dyn ImageFetcher,
) -> String {
    let options = with_inferred_packages(html, options);
    let nodes = parse_fragment(html);
    let cx = RenderContext::new(&options, fetcher);
    htmltex_latex_backend::convert(&nodes, &cx)
}

fn with_inferred_packages<'a>(
    html: &str,
    options: &'a ConversionOptions,
) -> Cow<'a, ConversionOptions> {
    if options.include_packages.is_some() {
        return Cow::Borrowed(options);
    }
    Cow::Owned(ConversionOptions {
        include_packages: Some(infer_packages(html)),
        ..options.clone()
    })
}

/// Convert an HTML file and write `<output_name>.tex` next to it.
///
/// `output_name` defaults to the input's file name, so `page.html` becomes
/// `page.html.tex`. Images land under the input's directory unless the
/// options name another compilation directory. Returns the written path.
pub fn convert_file(
    input: &Path,
    output_name: Option<&str>,
    options: &ConversionOptions,
) -> ConversionResult<PathBuf> {
    convert_file_with_fetcher(input, output_name, options, &HttpFetcher::new())
}

/// [`convert_file`] with a caller-supplied image fetcher.
pub fn convert_file_with_fetcher(
    input: &Path,
    output_name: Option<&str>,
    options: &ConversionOptions,
    fetcher: &dyn ImageFetcher,
) -> ConversionResult<PathBuf> {
    let name = match output_name {
        Some(name) => name.to_string(),
        None => input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| ConversionError::InvalidInput {
                message: format!("{} has no file name", input.display()),
            })?,
    };
    convert_file_into(input, &input_dir(input), &name, options, fetcher)
}

/// Convert an HTML file and write `<out_dir>/<name>.tex`.
///
/// Images still default to the input's directory.
pub fn convert_file_into(
    input: &Path,
    out_dir: &Path,
    name: &str,
    options: &ConversionOptions,
    fetcher: &dyn ImageFetcher,
) -> ConversionResult<PathBuf> {
    let html = fs::read_to_string(input).map_err(|e| ConversionError::from(e).at_path(input))?;

    let options = if options.compilation_dir.is_some() {
        Cow::Borrowed(options)
    } else {
        Cow::Owned(ConversionOptions {
            compilation_dir: Some(input_dir(input)),
            ..options.clone()
        })
    };

    let latex = convert_text_with_fetcher(&html, &options, fetcher);
    export_file(&latex, name, out_dir)
}

/// Write `text` to `<dir>/<filename>.tex`, creating `dir` as needed.
pub fn export_file(text: &str, filename: &str, dir: &Path) -> ConversionResult<PathBuf> {
    if filename.is_empty() {
        return Err(ConversionError::InvalidInput {
            message: "output file name is empty".to_string(),
        });
    }
    fs::create_dir_all(dir).map_err(|e| ConversionError::from(e).at_path(dir))?;
    let path = dir.join(format!("{}.tex", filename));
    fs::write(&path, text).map_err(|e| ConversionError::from(e).at_path(&path))?;
    log::debug!("wrote {}", path.display());
    Ok(path)
}

/// Directory holding `input`, `.` for a bare file name.
pub fn input_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
