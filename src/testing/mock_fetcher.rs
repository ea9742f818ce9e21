//! In-memory playlist fetcher

use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{RadioError, Result};
use crate::playlist::PlaylistFetcher;

/// Fetcher serving canned bodies; unknown URLs fail
#[derive(Default)]
pub struct StaticFetcher {
    bodies: HashMap<String, String>,
    failures: HashSet<String>,
    delay: Option<Duration>,
    requests: Mutex<Vec<String>>,
}

impl StaticFetcher {
    /// Create a fetcher with no bodies
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`
    #[must_use]
    pub fn with_body(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.bodies.insert(url.into(), body.into());
        self
    }

    /// Make fetching `url` fail, even if a body was registered for it
    #[must_use]
    pub fn with_failure(mut self, url: impl Into<String>) -> Self {
        self.failures.insert(url.into());
        self
    }

    /// Wait `delay` before every response
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// URLs requested so far, in order
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlaylistFetcher for StaticFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        self.requests.lock().unwrap().push(url.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failures.contains(url) {
            return Err(RadioError::Resolution {
                url: url.to_string(),
                message: "simulated fetch failure".to_string(),
                source: Some(Box::new(io::Error::from(io::ErrorKind::ConnectionReset))),
            });
        }
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| RadioError::Resolution {
                url: url.to_string(),
                message: "no such playlist".to_string(),
                source: Some(Box::new(io::Error::from(io::ErrorKind::NotFound))),
            })
    }
}
