//! Observable session snapshot

use tokio::sync::watch;

use crate::types::SessionSnapshot;

/// Snapshot holder with change notifications
///
/// Writers are serialized by the session lock; this only fans out copies.
pub struct StateContainer {
    /// State change sender, also holds the current value
    tx: watch::Sender<SessionSnapshot>,
}

impl StateContainer {
    /// Create a new state container
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = watch::channel(SessionSnapshot::default());
        Self { tx }
    }

    /// Get current state
    #[must_use]
    pub fn get(&self) -> SessionSnapshot {
        self.tx.borrow().clone()
    }

    /// Subscribe to state changes
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.tx.subscribe()
    }

    /// Replace the published snapshot
    pub fn publish(&self, snapshot: SessionSnapshot) {
        self.tx.send_replace(snapshot);
    }
}

impl Default for StateContainer {
    fn default() -> Self {
        Self::new()
    }
}
