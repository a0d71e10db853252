//! Image retrieval collaborator.

use std::fmt;
use std::path::Path;

use url::Url;

/// Fetches a remote image and stores it at `dest`.
///
/// The caller has already created the parent directory of `dest`.
pub trait ImageFetcher {
    fn fetch(&self, url: &Url, dest: &Path) -> Result<(), FetchError>;
}

/// Fetcher that never touches the network.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopFetcher;

impl ImageFetcher for NoopFetcher {
    fn fetch(&self, url: &Url, _dest: &Path) -> Result<(), FetchError> {
        Err(FetchError::Disabled {
            url: url.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// `src` is not an absolute URL (a local path, usually).
    NotAUrl { src: String, message: String },
    /// Network fetching is turned off.
    Disabled { url: String },
    /// Transport or HTTP status failure.
    Transport { url: String, message: String },
    /// Creating the images directory or writing the file failed.
    Io { message: String },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NotAUrl { src, message } => {
                write!(f, "'{}' is not an absolute URL: {}", src, message)
            }
            FetchError::Disabled { url } => write!(f, "fetching disabled for {}", url),
            FetchError::Transport { url, message } => {
                write!(f, "failed to fetch {}: {}", url, message)
            }
            FetchError::Io { message } => write!(f, "IO error: {}", message),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<std::io::Error> for FetchError {
    fn from(err: std::io::Error) -> Self {
        FetchError::Io {
            message: err.to_string(),
        }
    }
}
