//! # radio-session
//!
//! Background internet-radio playback sessions.
//!
//! ## Features
//!
//! - `.pls` / `.m3u` playlist resolution with fail-open fallback
//! - Playback state machine driving a pluggable player engine
//! - ICY now-playing metadata extraction
//! - Typed state and metadata events
//! - Notification / foreground-service lifecycle
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use radio_session::RadioSession;
//! use radio_session::testing::{MockEngine, MockPresenter};
//!
//! # async fn example() -> Result<(), radio_session::RadioError> {
//! let engine = Arc::new(MockEngine::new());
//! let presenter = Arc::new(MockPresenter::new());
//! let session = RadioSession::builder(engine, presenter).build()?;
//!
//! session.start("http://radio.example/jazz.m3u", "Jazz FM").await?;
//! session.play()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Session**: `RadioSession` - owns the engine, state and events
//! - **Ports**: `PlayerEngine` and `NotificationPresenter` - host integrations
//! - **Pure logic**: `playlist` and `metadata` - resolution and extraction

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Public modules
/// Error types
pub mod error;
/// State management
pub mod state;
/// Core types
pub mod types;

/// Testing utilities
pub mod testing;

pub mod engine;
pub mod metadata;
pub mod notification;
pub mod playlist;
mod session;

// Re-exports
pub use engine::{EngineListener, PlayerEngine};
pub use error::{RadioError, Result};
pub use metadata::{IcyInfo, MetadataEvent, extract};
pub use notification::{MediaDescription, NotificationListener, NotificationPresenter};
pub use playlist::PlaylistResolver;
pub use session::{RadioSession, SessionBuilder};
pub use state::{EventBus, SessionEvent};
pub use types::{
    EngineState, Lifecycle, NowPlaying, PlaybackState, RadioConfig, RepeatMode, ResolvedPlaylist,
    SessionSnapshot, StreamReference,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude for common imports
///
/// Convenient re-exports
pub mod prelude {
    pub use crate::{
        EngineState, MetadataEvent, NotificationPresenter, NowPlaying, PlaybackState,
        PlayerEngine, RadioConfig, RadioError, RadioSession, SessionEvent, StreamReference,
    };
}
