//! Document wrapper and package inference.

use crate::options::ConversionOptions;
use crate::templates;

/// Raw-source substrings that imply a package, in emission order.
const PACKAGE_TRIGGERS: [(&str, &str); 6] = [
    ("\\cfrac", "amsmath"),
    ("<img", "graphicx"),
    ("\\therefore", "amssymb"),
    ("<s>", "ulem"),
    ("</a>", "hyperref"),
    ("</code>", "listings"),
];

/// Packages required by the raw HTML source.
pub fn infer_packages(source: &str) -> Vec<String> {
    PACKAGE_TRIGGERS
        .iter()
        .filter(|(trigger, _)| source.contains(trigger))
        .map(|(_, package)| package.to_string())
        .collect()
}

/// Surround body blocks with the preamble and `\end{document}` when the
/// options ask for a document wrapper.
pub fn wrap_document(body: Vec<String>, options: &ConversionOptions) -> Vec<String> {
    if !options.include_document_wrapper {
        return body;
    }
    let mut blocks = Vec::with_capacity(body.len() + 4);
    blocks.push(templates::document_class(&options.doc_class));
    if let Some(packages) = options.include_packages.as_deref() {
        if !packages.is_empty() {
            blocks.push(templates::use_packages(packages));
        }
    }
    blocks.push(templates::begin_document(
        options.title.as_deref(),
        options.author.as_deref(),
        options.include_date,
    ));
    blocks.extend(body);
    blocks.push(templates::END_DOCUMENT.to_string());
    blocks
}
