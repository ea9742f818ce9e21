//! Notification and foreground-service boundary
//!
//! The presenter renders a media notification from the session's
//! [`MediaDescription`] and reports notification lifecycle through
//! [`NotificationListener`].

use std::sync::{Arc, Weak};

use bytes::Bytes;

use crate::types::NotificationConfig;

/// Image shown as the notification's large icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    /// Encoded image bytes
    pub data: Bytes,
    /// MIME type of `data`, e.g. `image/png`
    pub mime_type: String,
}

/// Everything a presenter needs to draw the notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayInfo {
    /// Main line
    pub title: String,
    /// Second line, if any
    pub subtitle: Option<String>,
    /// Large icon, if any
    pub icon: Option<Artwork>,
}

/// Renders the media notification and controls foreground status
///
/// `attach` and `detach` must not deliver [`NotificationListener`] callbacks
/// synchronously; queries through [`MediaDescription`] are fine.
pub trait NotificationPresenter: Send + Sync {
    /// Start presenting for `session`
    fn attach(&self, session: Weak<dyn SessionCallbacks>, config: &NotificationConfig);

    /// Stop presenting and drop the session reference
    fn detach(&self);

    /// Re-query the description and redraw
    fn invalidate(&self);

    /// Promote the host to a foreground service showing `notification_id`
    fn start_foreground(&self, notification_id: u32);

    /// Leave foreground status and remove the notification
    fn stop_foreground(&self);
}

/// Display attributes queried by the presenter
pub trait MediaDescription: Send + Sync {
    /// Current title
    fn content_title(&self) -> String;

    /// Current subtitle
    fn content_text(&self) -> Option<String>;

    /// Large icon; `None` simply omits it
    fn large_icon(&self) -> Option<Artwork>;

    /// All attributes at once
    fn display_info(&self) -> DisplayInfo {
        DisplayInfo {
            title: self.content_title(),
            subtitle: self.content_text(),
            icon: self.large_icon(),
        }
    }
}

/// Notification lifecycle signals reported by the presenter
pub trait NotificationListener: Send + Sync {
    /// A notification was posted; `ongoing` when it cannot be dismissed
    fn on_notification_posted(&self, notification_id: u32, ongoing: bool);

    /// The notification was removed
    fn on_notification_cancelled(&self, notification_id: u32);
}

/// What a presenter holds on to: description plus lifecycle callbacks
pub trait SessionCallbacks: MediaDescription + NotificationListener {}

impl<T: MediaDescription + NotificationListener> SessionCallbacks for T {}

/// Hook supplying the large icon
pub trait LargeIconProvider: Send + Sync {
    /// Current icon, if one is available
    fn large_icon(&self) -> Option<Artwork>;
}

impl<F> LargeIconProvider for F
where
    F: Fn() -> Option<Artwork> + Send + Sync,
{
    fn large_icon(&self) -> Option<Artwork> {
        self()
    }
}

/// Shared icon provider handle
pub type SharedIconProvider = Arc<dyn LargeIconProvider>;
