//! Event bus for session events

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tokio::sync::mpsc;

/// Events republished to external listeners
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The engine reported a playback state; emitted for every report
    StateChanged {
        /// Whether the engine plays as soon as it is ready
        play_when_ready: bool,
    },
    /// New inline metadata arrived
    MetadataChanged {
        /// Ordered `[title, subtitle]`
        items: [String; 2],
    },
}

impl SessionEvent {
    /// Serialize to the JSON shape delivered to listeners
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Event bus for distributing events
///
/// Every subscriber owns an unbounded queue, so a slow reader never loses
/// events. Queues of dropped receivers are pruned on the next emit.
pub struct EventBus {
    /// One sender per live subscriber
    subscribers: Mutex<Vec<mpsc::UnboundedSender<SessionEvent>>>,
}

impl EventBus {
    /// Create a new event bus
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<mpsc::UnboundedSender<SessionEvent>>> {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Subscribe to events emitted from now on
    #[must_use]
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<SessionEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.lock().push(tx);
        rx
    }

    /// Emit an event to every subscriber
    pub fn emit(&self, event: SessionEvent) {
        self.lock().retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Get subscriber count
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        let mut subscribers = self.lock();
        subscribers.retain(|tx| !tx.is_closed());
        subscribers.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.lock().len())
            .finish()
    }
}

/// Event filter for selective subscription
pub struct EventFilter {
    rx: mpsc::UnboundedReceiver<SessionEvent>,
    filter: Box<dyn Fn(&SessionEvent) -> bool + Send>,
}

impl EventFilter {
    /// Create a filtered event receiver
    pub fn new<F>(bus: &EventBus, filter: F) -> Self
    where
        F: Fn(&SessionEvent) -> bool + Send + 'static,
    {
        Self {
            rx: bus.subscribe(),
            filter: Box::new(filter),
        }
    }

    /// Receive next matching event
    ///
    /// `None` once the bus is gone and every queued event was read.
    pub async fn recv(&mut self) -> Option<SessionEvent> {
        while let Some(event) = self.rx.recv().await {
            if (self.filter)(&event) {
                return Some(event);
            }
        }
        None
    }
}

/// Helper functions for common filters
impl EventFilter {
    /// Filter for playback state events only
    #[must_use]
    pub fn state_events(bus: &EventBus) -> Self {
        Self::new(bus, |e| matches!(e, SessionEvent::StateChanged { .. }))
    }

    /// Filter for metadata events only
    #[must_use]
    pub fn metadata_events(bus: &EventBus) -> Self {
        Self::new(bus, |e| matches!(e, SessionEvent::MetadataChanged { .. }))
    }
}
