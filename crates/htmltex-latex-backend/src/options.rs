use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options threaded through every conversion call.
///
/// Field defaults follow the command line tool: breaks are ignored, sole
/// equations are promoted to display math, images get generated names and
/// are centered, and no document wrapper is emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Drop raw newlines and render `<br>` as a space.
    pub ignore_breaks: bool,
    /// Rewrite `\(`…`\)` inline math to `$`…`$`.
    pub prefer_dollar_inline_math: bool,
    /// Disable promotion of equation-only paragraphs to `\[`…`\]`.
    pub skip_wrapping_equations: bool,

    pub autogen_image_names: bool,
    pub image_width: Option<String>,
    pub image_height: Option<String>,
    /// Only honored when a width or height is set.
    pub keep_image_aspect_ratio: bool,
    pub center_images: bool,
    /// Directory that receives `images/`. Unset means the working directory
    /// at the time the conversion starts.
    pub compilation_dir: Option<PathBuf>,
    /// Log swallowed image failures.
    pub debug: bool,

    pub include_document_wrapper: bool,
    pub doc_class: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub include_date: bool,
    /// Explicit `\usepackage` list. `None` lets the caller infer packages
    /// from the source text.
    pub include_packages: Option<Vec<String>>,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            ignore_breaks: true,
            prefer_dollar_inline_math: false,
            skip_wrapping_equations: false,
            autogen_image_names: true,
            image_width: None,
            image_height: None,
            keep_image_aspect_ratio: false,
            center_images: true,
            compilation_dir: None,
            debug: false,
            include_document_wrapper: false,
            doc_class: "article".to_string(),
            title: None,
            author: None,
            include_date: false,
            include_packages: None,
        }
    }
}

impl ConversionOptions {
    /// Options for a standalone document with the given title.
    pub fn document(title: impl Into<String>) -> Self {
        Self {
            include_document_wrapper: true,
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Resolve the compilation directory once, falling back to the current
    /// working directory and then to `.`.
    pub fn resolve_compilation_dir(&self) -> PathBuf {
        self.compilation_dir
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
