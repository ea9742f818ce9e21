use std::sync::Arc;

use super::RadioSession;
use crate::engine::PlayerEngine;
use crate::error::Result;
use crate::notification::{NotificationPresenter, SharedIconProvider};
use crate::playlist::{PlaylistFetcher, PlaylistResolver};
use crate::types::RadioConfig;

/// Builder for `RadioSession`
pub struct SessionBuilder {
    config: RadioConfig,
    engine: Arc<dyn PlayerEngine>,
    presenter: Arc<dyn NotificationPresenter>,
    fetcher: Option<Arc<dyn PlaylistFetcher>>,
    icon: Option<SharedIconProvider>,
}

impl SessionBuilder {
    /// Create a builder around the engine and presenter ports
    #[must_use]
    pub fn new(
        engine: Arc<dyn PlayerEngine>,
        presenter: Arc<dyn NotificationPresenter>,
    ) -> Self {
        Self {
            config: RadioConfig::default(),
            engine,
            presenter,
            fetcher: None,
            icon: None,
        }
    }

    /// Use a custom configuration
    #[must_use]
    pub fn config(mut self, config: RadioConfig) -> Self {
        self.config = config;
        self
    }

    /// Fetch playlists through `fetcher` instead of HTTP
    #[must_use]
    pub fn fetcher(mut self, fetcher: Arc<dyn PlaylistFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Supply the notification large icon
    #[must_use]
    pub fn icon_provider(mut self, provider: SharedIconProvider) -> Self {
        self.icon = Some(provider);
        self
    }

    /// Build the session
    ///
    /// # Errors
    ///
    /// Returns error if the default HTTP fetcher cannot be created.
    pub fn build(self) -> Result<Arc<RadioSession>> {
        let resolver = match self.fetcher {
            Some(fetcher) => PlaylistResolver::new(fetcher, self.config.fetch_timeout),
            None => PlaylistResolver::http(&self.config)?,
        };
        Ok(RadioSession::new(
            self.config,
            self.engine,
            self.presenter,
            resolver,
            self.icon,
        ))
    }
}
