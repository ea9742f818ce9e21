//! Common test utilities and fixtures
#![allow(dead_code)]

use std::sync::{Arc, Once};
use std::time::Duration;

use radio_session::testing::{MockEngine, MockPresenter};
use radio_session::{RadioConfig, RadioSession};
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Initialize test logging (call once per test module)
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::from_default_env()
            .add_directive("radio_session=debug".parse().unwrap());

        let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
    });
}

/// Create a test configuration with short timeouts
pub fn test_config() -> RadioConfig {
    RadioConfig::builder()
        .fetch_timeout(Duration::from_millis(500))
        .user_agent("radio-session-tests")
        .build()
}

/// Session wired to mocks, fetching over real HTTP
pub fn http_session() -> (Arc<MockEngine>, Arc<MockPresenter>, Arc<RadioSession>) {
    let engine = Arc::new(MockEngine::new());
    let presenter = Arc::new(MockPresenter::new());
    let session = RadioSession::builder(engine.clone(), presenter.clone())
        .config(test_config())
        .build()
        .expect("Failed to build session");
    (engine, presenter, session)
}
