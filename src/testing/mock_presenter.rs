//! Mock notification presenter

use std::sync::{Arc, Mutex, Weak};

use crate::notification::{DisplayInfo, NotificationPresenter, SessionCallbacks};
use crate::types::NotificationConfig;

/// Call received by [`MockPresenter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterCall {
    /// `attach`, with the channel id it was configured with
    Attach(String),
    /// `detach`
    Detach,
    /// `invalidate`
    Invalidate,
    /// `start_foreground`
    StartForeground(u32),
    /// `stop_foreground`
    StopForeground,
}

/// Presenter double; re-renders the description on every invalidate
#[derive(Default)]
pub struct MockPresenter {
    calls: Mutex<Vec<PresenterCall>>,
    session: Mutex<Option<Weak<dyn SessionCallbacks>>>,
    rendered: Mutex<Vec<DisplayInfo>>,
}

impl MockPresenter {
    /// Create a detached presenter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls received so far, in order
    #[must_use]
    pub fn calls(&self) -> Vec<PresenterCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of times `call` was received
    #[must_use]
    pub fn count(&self, call: &PresenterCall) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == call).count()
    }

    /// Every notification drawn so far
    #[must_use]
    pub fn rendered(&self) -> Vec<DisplayInfo> {
        self.rendered.lock().unwrap().clone()
    }

    /// Most recent notification drawn
    #[must_use]
    pub fn last_rendered(&self) -> Option<DisplayInfo> {
        self.rendered.lock().unwrap().last().cloned()
    }

    fn session(&self) -> Option<Arc<dyn SessionCallbacks>> {
        self.session.lock().unwrap().as_ref().and_then(Weak::upgrade)
    }

    /// Simulate the OS posting the notification
    pub fn post(&self, notification_id: u32, ongoing: bool) {
        if let Some(session) = self.session() {
            session.on_notification_posted(notification_id, ongoing);
        }
    }

    /// Simulate the user dismissing the notification
    pub fn cancel(&self, notification_id: u32) {
        if let Some(session) = self.session() {
            session.on_notification_cancelled(notification_id);
        }
    }

    fn render(&self) {
        if let Some(session) = self.session() {
            let info = session.display_info();
            self.rendered.lock().unwrap().push(info);
        }
    }

    fn record(&self, call: PresenterCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl NotificationPresenter for MockPresenter {
    fn attach(&self, session: Weak<dyn SessionCallbacks>, config: &NotificationConfig) {
        self.record(PresenterCall::Attach(config.channel_id.clone()));
        *self.session.lock().unwrap() = Some(session);
        self.render();
    }

    fn detach(&self) {
        self.record(PresenterCall::Detach);
        *self.session.lock().unwrap() = None;
    }

    fn invalidate(&self) {
        self.record(PresenterCall::Invalidate);
        self.render();
    }

    fn start_foreground(&self, notification_id: u32) {
        self.record(PresenterCall::StartForeground(notification_id));
    }

    fn stop_foreground(&self) {
        self.record(PresenterCall::StopForeground);
    }
}
