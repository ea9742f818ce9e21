use std::time::Duration;

use async_trait::async_trait;

use crate::error::{RadioError, Result};
use crate::types::RadioConfig;

/// Source of playlist bodies
#[async_trait]
pub trait PlaylistFetcher: Send + Sync {
    /// Fetch the resource at `url` as text
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

/// HTTP fetcher backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a fetcher using the timeout and user agent from `config`
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: &RadioConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.fetch_timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            client,
            timeout: config.fetch_timeout,
        })
    }
}

#[async_trait]
impl PlaylistFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        tracing::debug!("Fetching playlist {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                RadioError::Timeout {
                    duration: self.timeout,
                }
            } else {
                RadioError::Http(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RadioError::Resolution {
                url: url.to_string(),
                message: format!("HTTP status {status}"),
                source: response
                    .error_for_status()
                    .err()
                    .map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
            });
        }

        response.text().await.map_err(|e| RadioError::Resolution {
            url: url.to_string(),
            message: "failed to read playlist body".to_string(),
            source: Some(Box::new(e)),
        })
    }
}
