//! Mock player engine recording every command

use std::sync::{Mutex, Weak};

use crate::engine::{EngineListener, PlayerEngine};
use crate::metadata::MetadataEvent;
use crate::types::{EngineState, RepeatMode};

/// Command received by [`MockEngine`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    /// `load_playlist`
    LoadPlaylist(Vec<String>),
    /// `set_repeat_mode`
    SetRepeatMode(RepeatMode),
    /// `prepare`
    Prepare,
    /// `set_play_when_ready`
    SetPlayWhenReady(bool),
    /// `release`
    Release,
}

/// Engine double; tests drive callbacks with [`MockEngine::report_state`]
/// and [`MockEngine::report_metadata`]
#[derive(Default)]
pub struct MockEngine {
    commands: Mutex<Vec<EngineCommand>>,
    listener: Mutex<Option<Weak<dyn EngineListener>>>,
}

impl MockEngine {
    /// Create an engine with no listener
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands received so far, in order
    #[must_use]
    pub fn commands(&self) -> Vec<EngineCommand> {
        self.commands.lock().unwrap().clone()
    }

    /// Number of times `command` was received
    #[must_use]
    pub fn count(&self, command: &EngineCommand) -> usize {
        self.commands
            .lock()
            .unwrap()
            .iter()
            .filter(|c| *c == command)
            .count()
    }

    /// Whether a listener is registered and alive
    #[must_use]
    pub fn has_listener(&self) -> bool {
        self.listener().is_some()
    }

    fn listener(&self) -> Option<std::sync::Arc<dyn EngineListener>> {
        self.listener
            .lock()
            .unwrap()
            .as_ref()
            .and_then(Weak::upgrade)
    }

    /// Deliver a state callback to the listener
    pub fn report_state(&self, state: EngineState, play_when_ready: bool) {
        if let Some(listener) = self.listener() {
            listener.on_state_changed(state, play_when_ready);
        }
    }

    /// Deliver a metadata callback to the listener
    pub fn report_metadata(&self, event: &MetadataEvent) {
        if let Some(listener) = self.listener() {
            listener.on_metadata(event);
        }
    }

    fn record(&self, command: EngineCommand) {
        self.commands.lock().unwrap().push(command);
    }
}

impl PlayerEngine for MockEngine {
    fn set_listener(&self, listener: Weak<dyn EngineListener>) {
        *self.listener.lock().unwrap() = Some(listener);
    }

    fn load_playlist(&self, uris: &[String]) {
        self.record(EngineCommand::LoadPlaylist(uris.to_vec()));
    }

    fn set_repeat_mode(&self, mode: RepeatMode) {
        self.record(EngineCommand::SetRepeatMode(mode));
    }

    fn prepare(&self) {
        self.record(EngineCommand::Prepare);
    }

    fn set_play_when_ready(&self, play_when_ready: bool) {
        self.record(EngineCommand::SetPlayWhenReady(play_when_ready));
    }

    fn release(&self) {
        self.record(EngineCommand::Release);
        // Released engines stop calling back
        *self.listener.lock().unwrap() = None;
    }
}
