use std::time::Duration;

/// Configuration for radio session behavior
#[derive(Debug, Clone)]
pub struct RadioConfig {
    /// Timeout for fetching a playlist (default: 10 seconds)
    pub fetch_timeout: Duration,

    /// User-Agent header sent with playlist requests
    pub user_agent: String,

    /// Notification presentation settings
    pub notification: NotificationConfig,
}

impl Default for RadioConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(10),
            user_agent: format!("radio-session/{}", env!("CARGO_PKG_VERSION")),
            notification: NotificationConfig::default(),
        }
    }
}

impl RadioConfig {
    /// Create a new config builder
    #[must_use]
    pub fn builder() -> RadioConfigBuilder {
        RadioConfigBuilder::default()
    }
}

/// Settings handed to the notification presenter on attach
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationConfig {
    /// Notification channel identifier
    pub channel_id: String,
    /// Human readable channel name
    pub channel_name: String,
    /// Notification identifier used for the foreground service
    pub notification_id: u32,
    /// Show play/pause actions
    pub use_play_pause_actions: bool,
    /// Show previous/next actions
    pub use_navigation_actions: bool,
    /// Show previous/next actions in the compact view
    pub use_navigation_actions_in_compact_view: bool,
    /// Rewind step; zero hides the action
    pub rewind_increment: Duration,
    /// Fast-forward step; zero hides the action
    pub fast_forward_increment: Duration,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            channel_id: "radio_channel_id".to_string(),
            channel_name: "Radio".to_string(),
            notification_id: 1,
            use_play_pause_actions: true,
            use_navigation_actions: false,
            use_navigation_actions_in_compact_view: true,
            // Live streams cannot seek
            rewind_increment: Duration::ZERO,
            fast_forward_increment: Duration::ZERO,
        }
    }
}

/// Builder for `RadioConfig`
#[derive(Debug, Clone, Default)]
pub struct RadioConfigBuilder {
    config: RadioConfig,
}

impl RadioConfigBuilder {
    /// Set playlist fetch timeout
    #[must_use]
    pub fn fetch_timeout(mut self, timeout: Duration) -> Self {
        self.config.fetch_timeout = timeout;
        self
    }

    /// Set the User-Agent for playlist requests
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set notification channel id and name
    #[must_use]
    pub fn notification_channel(
        mut self,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.config.notification.channel_id = id.into();
        self.config.notification.channel_name = name.into();
        self
    }

    /// Set notification identifier
    #[must_use]
    pub fn notification_id(mut self, id: u32) -> Self {
        self.config.notification.notification_id = id;
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> RadioConfig {
        self.config
    }
}
