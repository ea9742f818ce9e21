use super::*;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::RadioError;

// --- config.rs tests ---

#[test]
fn test_config_defaults() {
    let config = RadioConfig::default();

    assert_eq!(config.fetch_timeout, Duration::from_secs(10));
    assert!(config.user_agent.starts_with("radio-session/"));
    assert_eq!(config.notification.channel_id, "radio_channel_id");
    assert_eq!(config.notification.notification_id, 1);
    assert!(config.notification.use_play_pause_actions);
    assert!(!config.notification.use_navigation_actions);
    assert_eq!(config.notification.rewind_increment, Duration::ZERO);
}

#[test]
fn test_config_builder() {
    let config = RadioConfig::builder()
        .fetch_timeout(Duration::from_secs(3))
        .user_agent("test-agent")
        .notification_channel("jazz", "Jazz Radio")
        .notification_id(7)
        .build();

    assert_eq!(config.fetch_timeout, Duration::from_secs(3));
    assert_eq!(config.user_agent, "test-agent");
    assert_eq!(config.notification.channel_id, "jazz");
    assert_eq!(config.notification.channel_name, "Jazz Radio");
    assert_eq!(config.notification.notification_id, 7);
}

// --- state.rs tests ---

#[test]
fn test_playback_state_default() {
    let state = PlaybackState::default();
    assert_eq!(state.engine_state, EngineState::Idle);
    assert!(!state.play_when_ready);
    assert!(!state.is_playing());
}

#[test]
fn test_is_playing_requires_ready() {
    let buffering = PlaybackState {
        engine_state: EngineState::Buffering,
        play_when_ready: true,
    };
    assert!(!buffering.is_playing());

    let ready = PlaybackState {
        engine_state: EngineState::Ready,
        play_when_ready: true,
    };
    assert!(ready.is_playing());
}

#[test]
fn test_lifecycle_display() {
    assert_eq!(Lifecycle::Created.to_string(), "created");
    assert_eq!(Lifecycle::Stopped.to_string(), "stopped");
}

// --- stream.rs tests ---

#[test]
fn test_stream_reference_requires_url() {
    let err = StreamReference::new("", "Jazz FM").unwrap_err();
    assert!(matches!(err, RadioError::MissingInput { ref name } if name == "stream_url"));

    let err = StreamReference::new("   ", "Jazz FM").unwrap_err();
    assert!(matches!(err, RadioError::MissingInput { .. }));
}

#[test]
fn test_stream_reference_from_params() {
    let mut params = HashMap::new();
    params.insert("stream_url".to_string(), "http://radio.example/live".to_string());
    params.insert("stream_title".to_string(), "Example FM".to_string());

    let reference = StreamReference::from_params(&params).unwrap();
    assert_eq!(reference.url(), "http://radio.example/live");
    assert_eq!(reference.fallback_title(), "Example FM");
}

#[test]
fn test_stream_reference_from_params_defaults_title() {
    let mut params = HashMap::new();
    params.insert("stream_url".to_string(), "http://radio.example/live".to_string());

    let reference = StreamReference::from_params(&params).unwrap();
    assert_eq!(reference.fallback_title(), "http://radio.example/live");
}

#[test]
fn test_stream_reference_from_params_missing_url() {
    let mut params = HashMap::new();
    params.insert("stream_title".to_string(), "Example FM".to_string());

    let err = StreamReference::from_params(&params).unwrap_err();
    assert!(matches!(err, RadioError::MissingInput { ref name } if name == "stream_url"));
}

#[test]
fn test_resolved_playlist_never_empty() {
    let playlist = ResolvedPlaylist::new(Vec::new(), "http://radio.example/a.pls");
    assert_eq!(playlist.uris(), ["http://radio.example/a.pls"]);
    assert_eq!(playlist.len(), 1);
    assert!(!playlist.is_empty());
}

#[test]
fn test_now_playing_split() {
    let np = NowPlaying::from_stream_title("Artist - Song");
    assert_eq!(np.title, "Artist");
    assert_eq!(np.subtitle, "Song");

    let np = NowPlaying::from_stream_title("JustATitle");
    assert_eq!(np.title, "JustATitle");
    assert_eq!(np.subtitle, "");
}

#[test]
fn test_now_playing_keeps_first_two_segments() {
    let np = NowPlaying::from_stream_title("A - B - C");
    assert_eq!(np.items(), ["A".to_string(), "B".to_string()]);
}

#[test]
fn test_now_playing_separator_needs_spaces() {
    let np = NowPlaying::from_stream_title("Jay-Z");
    assert_eq!(np.title, "Jay-Z");
    assert!(np.subtitle.is_empty());
}
