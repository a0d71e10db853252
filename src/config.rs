//! TOML configuration files
//!
//! A config file holds any subset of [`ConversionOptions`] fields; missing
//! keys keep their defaults.
//!
//! ```toml
//! ignore_breaks = false
//! include_document_wrapper = true
//! title = "Notes"
//! include_packages = ["amsmath", "graphicx"]
//! ```

use std::fs;
use std::path::Path;

use crate::utils::error::{ConversionError, ConversionResult};
use crate::ConversionOptions;

/// Parse options from TOML text.
pub fn parse_options(source: &str) -> ConversionResult<ConversionOptions> {
    Ok(toml::from_str(source)?)
}

/// Read and parse an options file.
pub fn load_options(path: &Path) -> ConversionResult<ConversionOptions> {
    let source = fs::read_to_string(path).map_err(|e| ConversionError::from(e).at_path(path))?;
    parse_options(&source).map_err(|e| e.at_path(path))
}
