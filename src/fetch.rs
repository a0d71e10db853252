//! HTTP image fetcher

use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::time::Duration;

use htmltex_latex_backend::{FetchError, ImageFetcher};
use ureq::Agent;
use url::Url;

/// Global timeout for a single image download.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Downloads images over HTTP(S) with a shared `ureq` agent.
pub struct HttpFetcher {
    agent: Agent,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::with_timeout(FETCH_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: Agent::new_with_config(config),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageFetcher for HttpFetcher {
    fn fetch(&self, url: &Url, dest: &Path) -> Result<(), FetchError> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::Transport {
                url: url.to_string(),
                message: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        let mut response = self
            .agent
            .get(url.as_str())
            .call()
            .map_err(|err| FetchError::Transport {
                url: url.to_string(),
                message: err.to_string(),
            })?;

        let mut file = File::create(dest)?;
        let copied = io::copy(&mut response.body_mut().as_reader(), &mut file);
        if let Err(err) = copied {
            drop(file);
            // A truncated download would otherwise be mistaken for a cached image.
            let _ = fs::remove_file(dest);
            return Err(FetchError::Transport {
                url: url.to_string(),
                message: err.to_string(),
            });
        }
        log::debug!("fetched {} into {}", url, dest.display());
        Ok(())
    }
}
