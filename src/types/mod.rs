//! Core types module

mod config;
mod state;
mod stream;

#[cfg(test)]
mod tests;

pub use config::{NotificationConfig, RadioConfig, RadioConfigBuilder};
pub use state::{EngineState, Lifecycle, PlaybackState, RepeatMode, SessionSnapshot};
pub use stream::{NowPlaying, ResolvedPlaylist, StreamReference};
