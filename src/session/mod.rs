//! Radio playback session

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;

use crate::engine::{EngineListener, PlayerEngine};
use crate::error::{RadioError, Result};
use crate::metadata::{self, MetadataEvent};
use crate::notification::{
    Artwork, MediaDescription, NotificationListener, NotificationPresenter, SessionCallbacks,
    SharedIconProvider,
};
use crate::playlist::PlaylistResolver;
use crate::state::{EventBus, SessionEvent, StateContainer};
use crate::types::{
    EngineState, Lifecycle, NowPlaying, PlaybackState, RadioConfig, RepeatMode, SessionSnapshot,
    StreamReference,
};

mod builder;

pub use builder::SessionBuilder;

/// Mutable session state, guarded by `RadioSession::inner`
#[derive(Debug, Default)]
struct SessionInner {
    lifecycle: Lifecycle,
    playback: PlaybackState,
    now_playing: Option<NowPlaying>,
    /// `play()`/`pause()` issued while resolving, applied once loaded
    pending_play_when_ready: Option<bool>,
    fallback_title: String,
    foreground: bool,
}

impl SessionInner {
    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            lifecycle: self.lifecycle,
            playback: self.playback,
            now_playing: self.now_playing.clone(),
            foreground: self.foreground,
        }
    }

    fn invalid_state(&self, message: &str) -> RadioError {
        RadioError::InvalidState {
            message: message.to_string(),
            current_state: self.lifecycle.to_string(),
        }
    }
}

/// A single background radio playback session
///
/// Resolves a stream reference, drives the [`PlayerEngine`] in repeat mode,
/// and republishes engine state and ICY metadata as [`SessionEvent`]s.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use radio_session::RadioSession;
/// use radio_session::testing::{MockEngine, MockPresenter};
///
/// # async fn example() -> Result<(), radio_session::RadioError> {
/// let session = RadioSession::builder(Arc::new(MockEngine::new()), Arc::new(MockPresenter::new()))
///     .build()?;
/// let mut events = session.subscribe();
///
/// session.start("http://radio.example/jazz.pls", "Jazz FM").await?;
/// session.play()?;
///
/// while let Some(event) = events.recv().await {
///     println!("{}", event.to_json().unwrap_or_default());
/// }
/// # Ok(())
/// # }
/// ```
pub struct RadioSession {
    config: RadioConfig,
    engine: Arc<dyn PlayerEngine>,
    presenter: Arc<dyn NotificationPresenter>,
    resolver: PlaylistResolver,
    icon: Option<SharedIconProvider>,
    /// Serializes start/play/pause/stop against each other
    commands: Mutex<()>,
    /// Serializes every state mutation, including engine callbacks
    inner: Mutex<SessionInner>,
    state: StateContainer,
    events: EventBus,
    /// Cancelled on stop; aborts an in-flight resolution
    lifetime: CancellationToken,
    weak_self: Weak<RadioSession>,
}

impl RadioSession {
    /// Create a session builder
    #[must_use]
    pub fn builder(
        engine: Arc<dyn PlayerEngine>,
        presenter: Arc<dyn NotificationPresenter>,
    ) -> SessionBuilder {
        SessionBuilder::new(engine, presenter)
    }

    fn new(
        config: RadioConfig,
        engine: Arc<dyn PlayerEngine>,
        presenter: Arc<dyn NotificationPresenter>,
        resolver: PlaylistResolver,
        icon: Option<SharedIconProvider>,
    ) -> Arc<Self> {
        Arc::new_cyclic(|weak_self| Self {
            config,
            engine,
            presenter,
            resolver,
            icon,
            commands: Mutex::new(()),
            inner: Mutex::new(SessionInner::default()),
            state: StateContainer::new(),
            events: EventBus::new(),
            lifetime: CancellationToken::new(),
            weak_self: weak_self.clone(),
        })
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_commands(&self) -> MutexGuard<'_, ()> {
        self.commands.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, inner: &SessionInner) {
        self.state.publish(inner.snapshot());
    }

    // === Commands ===

    /// Start playing `stream_url`, showing `stream_title` until metadata arrives
    ///
    /// Resolution runs without blocking engine callbacks. If the session is
    /// stopped meanwhile, the resolved playlist is discarded.
    ///
    /// # Errors
    ///
    /// Returns `MissingInput` if `stream_url` is empty, or `InvalidState`
    /// if the session was already started.
    pub async fn start(&self, stream_url: &str, stream_title: &str) -> Result<()> {
        let reference = StreamReference::new(stream_url, stream_title)?;
        self.start_with(reference).await
    }

    /// Start from a parameter map with `stream_url` and `stream_title` keys
    ///
    /// # Errors
    ///
    /// Same as [`RadioSession::start`].
    pub async fn start_with_params(&self, params: &HashMap<String, String>) -> Result<()> {
        let reference = StreamReference::from_params(params)?;
        self.start_with(reference).await
    }

    /// Start from an already validated reference
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the session was already started.
    pub async fn start_with(&self, reference: StreamReference) -> Result<()> {
        {
            let _commands = self.lock_commands();
            let mut inner = self.lock();
            if inner.lifecycle != Lifecycle::Created {
                return Err(inner.invalid_state("session already started"));
            }
            inner.lifecycle = Lifecycle::Resolving;
            inner.fallback_title = reference.fallback_title().to_string();
            self.publish(&inner);
        }

        tracing::info!("Starting radio session for {}", reference.url());

        let playlist = tokio::select! {
            () = self.lifetime.cancelled() => {
                tracing::debug!("Session stopped while resolving {}", reference.url());
                return Ok(());
            }
            playlist = self.resolver.resolve(reference.url()) => playlist,
        };

        let _commands = self.lock_commands();
        let pending = {
            let mut inner = self.lock();
            if inner.lifecycle != Lifecycle::Resolving {
                tracing::debug!(
                    "Discarding playlist for {}: session is {}",
                    reference.url(),
                    inner.lifecycle
                );
                return Ok(());
            }
            inner.pending_play_when_ready.take()
        };

        self.engine.load_playlist(playlist.uris());
        self.engine.set_repeat_mode(RepeatMode::One);
        if let Some(play_when_ready) = pending {
            self.engine.set_play_when_ready(play_when_ready);
        }

        {
            let mut inner = self.lock();
            inner.lifecycle = Lifecycle::Active;
            inner.playback = PlaybackState {
                play_when_ready: pending.unwrap_or_default(),
                ..PlaybackState::default()
            };
            self.publish(&inner);
        }

        let listener: Weak<dyn EngineListener> = self.weak_self.clone();
        self.engine.set_listener(listener);
        let callbacks: Weak<dyn SessionCallbacks> = self.weak_self.clone();
        self.presenter.attach(callbacks, &self.config.notification);

        tracing::info!(
            "Radio session active with {} stream(s) from {}",
            playlist.len(),
            reference.url()
        );
        Ok(())
    }

    /// Play as soon as the engine is ready
    ///
    /// While the stream reference is still resolving, the request is kept
    /// and applied right after the playlist is loaded.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the session was never started or is stopped.
    pub fn play(&self) -> Result<()> {
        self.set_play_when_ready(true)
    }

    /// Hold playback; the stream stays loaded
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the session was never started or is stopped.
    pub fn pause(&self) -> Result<()> {
        self.set_play_when_ready(false)
    }

    fn set_play_when_ready(&self, play_when_ready: bool) -> Result<()> {
        let _commands = self.lock_commands();
        {
            let mut inner = self.lock();
            match inner.lifecycle {
                Lifecycle::Active => {}
                Lifecycle::Resolving => {
                    tracing::debug!(
                        "Deferring play_when_ready={} until the stream is loaded",
                        play_when_ready
                    );
                    inner.pending_play_when_ready = Some(play_when_ready);
                    inner.playback.play_when_ready = play_when_ready;
                    self.publish(&inner);
                    return Ok(());
                }
                Lifecycle::Created | Lifecycle::Stopped => {
                    return Err(inner.invalid_state("session is not playing a stream"));
                }
            }
            inner.playback.play_when_ready = play_when_ready;
            self.publish(&inner);
        }
        self.engine.set_play_when_ready(play_when_ready);
        Ok(())
    }

    /// Tear the session down
    ///
    /// Detaches the presenter, releases the engine and leaves foreground.
    /// Only the first call has an effect; nothing is emitted afterwards.
    pub fn stop(&self) {
        let _commands = self.lock_commands();
        self.teardown();
    }

    fn teardown(&self) {
        let previous = {
            let mut inner = self.lock();
            if inner.lifecycle == Lifecycle::Stopped {
                return;
            }
            let previous = inner.lifecycle;
            inner.lifecycle = Lifecycle::Stopped;
            inner.foreground = false;
            self.publish(&inner);
            previous
        };

        self.lifetime.cancel();
        self.presenter.detach();
        self.engine.release();
        self.presenter.stop_foreground();

        tracing::info!("Radio session stopped (was {})", previous);
    }

    // === Accessors ===

    /// Subscribe to state-changed and metadata-changed events
    #[must_use]
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Event bus, for filtered subscriptions
    #[must_use]
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Subscribe to snapshot changes
    #[must_use]
    pub fn subscribe_state(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.subscribe()
    }

    /// Current snapshot
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().snapshot()
    }

    /// Current lifecycle stage
    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lock().lifecycle
    }

    /// Current playback state
    #[must_use]
    pub fn playback_state(&self) -> PlaybackState {
        self.lock().playback
    }

    /// Latest now-playing metadata
    #[must_use]
    pub fn now_playing(&self) -> Option<NowPlaying> {
        self.lock().now_playing.clone()
    }

    /// Whether the session runs as a foreground service
    #[must_use]
    pub fn is_foreground(&self) -> bool {
        self.lock().foreground
    }

    /// Session configuration
    #[must_use]
    pub fn config(&self) -> &RadioConfig {
        &self.config
    }
}

impl EngineListener for RadioSession {
    fn on_state_changed(&self, state: EngineState, play_when_ready: bool) {
        {
            let mut inner = self.lock();
            if inner.lifecycle != Lifecycle::Active {
                tracing::debug!("Ignoring engine state {:?}: session is {}", state, inner.lifecycle);
                return;
            }
            inner.playback = PlaybackState {
                engine_state: state,
                play_when_ready,
            };
            self.publish(&inner);
            self.events.emit(SessionEvent::StateChanged { play_when_ready });
        }

        if state == EngineState::Idle {
            // Engine dropped its media, e.g. after a playback error
            tracing::debug!("Engine idle, preparing");
            self.engine.prepare();
        }
    }

    fn on_metadata(&self, event: &MetadataEvent) {
        {
            let mut inner = self.lock();
            if inner.lifecycle != Lifecycle::Active {
                return;
            }
            let Some(now_playing) = metadata::extract(event) else {
                tracing::debug!("Metadata event without stream title, keeping previous");
                return;
            };
            tracing::info!(
                "Now playing: {} / {}",
                now_playing.title,
                now_playing.subtitle
            );
            let items = now_playing.items();
            inner.now_playing = Some(now_playing);
            self.publish(&inner);
            self.events.emit(SessionEvent::MetadataChanged { items });
        }

        self.presenter.invalidate();
    }
}

impl MediaDescription for RadioSession {
    fn content_title(&self) -> String {
        let inner = self.lock();
        inner
            .now_playing
            .as_ref()
            .map_or_else(|| inner.fallback_title.clone(), |np| np.title.clone())
    }

    fn content_text(&self) -> Option<String> {
        self.lock()
            .now_playing
            .as_ref()
            .map(|np| np.subtitle.clone())
            .filter(|subtitle| !subtitle.is_empty())
    }

    fn large_icon(&self) -> Option<Artwork> {
        self.icon.as_ref().and_then(|provider| provider.large_icon())
    }
}

impl NotificationListener for RadioSession {
    fn on_notification_posted(&self, notification_id: u32, ongoing: bool) {
        if !ongoing {
            return;
        }
        {
            let mut inner = self.lock();
            if inner.lifecycle != Lifecycle::Active || inner.foreground {
                return;
            }
            inner.foreground = true;
            self.publish(&inner);
        }
        tracing::debug!("Entering foreground with notification {}", notification_id);
        self.presenter.start_foreground(notification_id);
    }

    fn on_notification_cancelled(&self, notification_id: u32) {
        tracing::debug!("Notification {} cancelled, stopping session", notification_id);
        {
            let mut inner = self.lock();
            inner.foreground = false;
            self.publish(&inner);
        }
        self.stop();
    }
}

impl Drop for RadioSession {
    fn drop(&mut self) {
        // Abnormal teardown: the owner never called stop()
        self.teardown();
    }
}

impl std::fmt::Debug for RadioSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RadioSession")
            .field("state", &self.lock().snapshot())
            .finish_non_exhaustive()
    }
}
