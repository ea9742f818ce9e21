use serde::Serialize;

use super::stream::NowPlaying;

/// Playback state reported by the player engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineState {
    /// Nothing prepared; the engine needs `prepare()`
    #[default]
    Idle,
    /// Waiting for enough data to play
    Buffering,
    /// Able to play immediately
    Ready,
    /// Reached the end of the playlist
    Ended,
}

/// Current playback state of a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlaybackState {
    /// Last state reported by the engine
    pub engine_state: EngineState,

    /// Whether the engine plays as soon as it is ready
    pub play_when_ready: bool,
}

impl PlaybackState {
    /// Audio is audible right now
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.play_when_ready && self.engine_state == EngineState::Ready
    }
}

/// Repeat mode for the engine playlist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatMode {
    /// No repeat
    #[default]
    Off,
    /// Repeat entire playlist
    All,
    /// Repeat current item
    One,
}

/// Lifecycle stage of a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
    /// Constructed, `start()` not called yet
    #[default]
    Created,
    /// Resolving the stream reference
    Resolving,
    /// Engine loaded and listening
    Active,
    /// Torn down; terminal
    Stopped,
}

impl std::fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Created => "created",
            Self::Resolving => "resolving",
            Self::Active => "active",
            Self::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

/// Point-in-time view of a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// Lifecycle stage
    pub lifecycle: Lifecycle,
    /// Playback state
    pub playback: PlaybackState,
    /// Latest inline metadata, if any arrived
    pub now_playing: Option<NowPlaying>,
    /// Whether the session runs as a foreground service
    pub foreground: bool,
}
