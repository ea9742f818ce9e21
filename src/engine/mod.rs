//! Player engine boundary
//!
//! Decoding, buffering and audio output live behind [`PlayerEngine`]. The
//! engine reports back through [`EngineListener`], which the session
//! implements.

use std::sync::Weak;

use crate::metadata::MetadataEvent;
use crate::types::{EngineState, RepeatMode};

/// Streaming audio engine driven by a session
///
/// Commands are fire-and-forget. Implementations must ignore commands that
/// arrive after `release()`.
pub trait PlayerEngine: Send + Sync {
    /// Register the receiver of engine callbacks, replacing any previous one
    fn set_listener(&self, listener: Weak<dyn EngineListener>);

    /// Append media items in order
    fn load_playlist(&self, uris: &[String]);

    /// Set how the playlist repeats
    fn set_repeat_mode(&self, mode: RepeatMode);

    /// Acquire resources and start buffering
    fn prepare(&self);

    /// Play as soon as ready (`true`) or hold position (`false`)
    fn set_play_when_ready(&self, play_when_ready: bool);

    /// Free all resources; the engine is unusable afterwards
    fn release(&self);
}

/// Callbacks delivered by a [`PlayerEngine`]
///
/// May be invoked from any thread, including from inside an engine command.
pub trait EngineListener: Send + Sync {
    /// Playback state report
    fn on_state_changed(&self, state: EngineState, play_when_ready: bool);

    /// In-band metadata decoded from the stream
    fn on_metadata(&self, event: &MetadataEvent);
}
