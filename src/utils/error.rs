//! Error handling for htmltex conversions
//!
//! Everything that can escape a conversion call: reading the source,
//! writing the `.tex` artifact, loading a configuration file.

use std::fmt;
use std::path::{Path, PathBuf};

/// Conversion error type
#[derive(Debug, Clone)]
pub enum ConversionError {
    /// Invalid input
    InvalidInput { message: String },
    /// IO error, with the path involved when known
    IoError {
        path: Option<PathBuf>,
        message: String,
    },
    /// Configuration file could not be parsed
    ConfigError {
        path: Option<PathBuf>,
        message: String,
    },
}

impl ConversionError {
    /// Attach a path to an IO or config error.
    pub fn at_path(self, at: &Path) -> Self {
        match self {
            ConversionError::IoError { message, .. } => ConversionError::IoError {
                path: Some(at.to_path_buf()),
                message,
            },
            ConversionError::ConfigError { message, .. } => ConversionError::ConfigError {
                path: Some(at.to_path_buf()),
                message,
            },
            other => other,
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            ConversionError::IoError { path, message } => match path {
                Some(p) => write!(f, "IO error at {}: {}", p.display(), message),
                None => write!(f, "IO error: {}", message),
            },
            ConversionError::ConfigError { path, message } => match path {
                Some(p) => write!(f, "Invalid configuration in {}: {}", p.display(), message),
                None => write!(f, "Invalid configuration: {}", message),
            },
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        ConversionError::IoError {
            path: None,
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ConversionError {
    fn from(err: toml::de::Error) -> Self {
        ConversionError::ConfigError {
            path: None,
            message: err.message().to_string(),
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_includes_path() {
        let err = ConversionError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ))
        .at_path(Path::new("in.html"));
        assert_eq!(err.to_string(), "IO error at in.html: missing");
    }

    #[test]
    fn test_invalid_input_ignores_path() {
        let err = ConversionError::InvalidInput {
            message: "empty".to_string(),
        }
        .at_path(Path::new("x"));
        assert_eq!(err.to_string(), "Invalid input: empty");
    }
}
