use std::sync::Arc;
use std::time::Duration;

use super::fetcher::{HttpFetcher, PlaylistFetcher};
use super::format::PlaylistFormat;
use crate::error::{RadioError, Result};
use crate::types::{RadioConfig, ResolvedPlaylist};

/// Resolves stream references into playable URIs
///
/// Resolution fails open: any fetch or parse problem yields the original
/// URL as a direct stream.
#[derive(Clone)]
pub struct PlaylistResolver {
    fetcher: Arc<dyn PlaylistFetcher>,
    timeout: Duration,
}

impl PlaylistResolver {
    /// Create a resolver with a custom fetcher
    #[must_use]
    pub fn new(fetcher: Arc<dyn PlaylistFetcher>, timeout: Duration) -> Self {
        Self { fetcher, timeout }
    }

    /// Create a resolver fetching over HTTP
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn http(config: &RadioConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(config)?;
        Ok(Self::new(Arc::new(fetcher), config.fetch_timeout))
    }

    /// Resolve `url` into an ordered, non-empty list of URIs
    pub async fn resolve(&self, url: &str) -> ResolvedPlaylist {
        let format = PlaylistFormat::sniff(url);
        if !format.needs_fetch() {
            return ResolvedPlaylist::direct(url);
        }

        match self.fetch(url).await {
            Ok(body) => {
                let uris = format.parse(&body);
                if uris.is_empty() {
                    tracing::warn!(
                        "No stream entries in {:?} playlist {}, playing it directly",
                        format,
                        url
                    );
                } else {
                    tracing::info!("Resolved {} to {} stream(s)", url, uris.len());
                }
                ResolvedPlaylist::new(uris, url)
            }
            Err(e) => {
                tracing::warn!("Playlist resolution failed for {}: {}, playing it directly", url, e);
                ResolvedPlaylist::direct(url)
            }
        }
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        tokio::time::timeout(self.timeout, self.fetcher.fetch_text(url))
            .await
            .map_err(|_| RadioError::Timeout {
                duration: self.timeout,
            })?
    }
}

impl std::fmt::Debug for PlaylistResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaylistResolver")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
