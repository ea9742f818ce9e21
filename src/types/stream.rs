use std::collections::HashMap;

use serde::Serialize;

use crate::error::{RadioError, Result};

/// A user supplied stream to play
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamReference {
    url: String,
    fallback_title: String,
}

impl StreamReference {
    /// Parameter key for the stream URL
    pub const STREAM_URL: &'static str = "stream_url";
    /// Parameter key for the stream title
    pub const STREAM_TITLE: &'static str = "stream_title";

    /// Create a reference from a URL and the title shown until metadata arrives
    ///
    /// # Errors
    ///
    /// Returns `MissingInput` if `url` is empty.
    pub fn new(url: impl Into<String>, fallback_title: impl Into<String>) -> Result<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(RadioError::missing(Self::STREAM_URL));
        }
        Ok(Self {
            url,
            fallback_title: fallback_title.into(),
        })
    }

    /// Build a reference from start parameters
    ///
    /// `stream_url` is required, `stream_title` defaults to the URL.
    ///
    /// # Errors
    ///
    /// Returns `MissingInput` if `stream_url` is absent or empty.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self> {
        let url = params
            .get(Self::STREAM_URL)
            .ok_or_else(|| RadioError::missing(Self::STREAM_URL))?;
        let title = params.get(Self::STREAM_TITLE).unwrap_or(url);
        Self::new(url.clone(), title.clone())
    }

    /// Stream or playlist URL
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Title displayed while no metadata is known
    #[must_use]
    pub fn fallback_title(&self) -> &str {
        &self.fallback_title
    }
}

/// Ordered, never empty list of playable URIs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlaylist {
    uris: Vec<String>,
}

impl ResolvedPlaylist {
    /// Wrap resolved URIs, falling back to `original` when there are none
    #[must_use]
    pub fn new(uris: Vec<String>, original: &str) -> Self {
        if uris.is_empty() {
            Self::direct(original)
        } else {
            Self { uris }
        }
    }

    /// Playlist consisting of the URL itself
    #[must_use]
    pub fn direct(url: &str) -> Self {
        Self {
            uris: vec![url.to_string()],
        }
    }

    /// URIs in playback order
    #[must_use]
    pub fn uris(&self) -> &[String] {
        &self.uris
    }

    /// Number of entries (at least one)
    #[must_use]
    pub fn len(&self) -> usize {
        self.uris.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.uris.is_empty()
    }

    /// Consume into the URI list
    #[must_use]
    pub fn into_uris(self) -> Vec<String> {
        self.uris
    }
}

impl IntoIterator for ResolvedPlaylist {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.uris.into_iter()
    }
}

/// Now-playing information derived from inline stream metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NowPlaying {
    /// Primary line, usually the artist
    pub title: String,
    /// Secondary line, usually the song; may be empty
    pub subtitle: String,
}

impl NowPlaying {
    /// Separator between title and subtitle in a raw stream title
    pub const SEPARATOR: &'static str = " - ";

    /// Split a raw stream title into title and subtitle
    #[must_use]
    pub fn from_stream_title(raw: &str) -> Self {
        let mut parts = raw.split(Self::SEPARATOR);
        let title = parts.next().unwrap_or_default().to_string();
        let subtitle = parts.next().unwrap_or_default().to_string();
        Self { title, subtitle }
    }

    /// Ordered `[title, subtitle]` pair as published to listeners
    #[must_use]
    pub fn items(&self) -> [String; 2] {
        [self.title.clone(), self.subtitle.clone()]
    }
}
