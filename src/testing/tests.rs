use std::sync::Arc;

use super::mock_server::{MockResponse, MockServer};
use super::*;
use crate::metadata::{IcyInfo, MetadataEvent};
use crate::types::EngineState;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

#[tokio::test]
async fn test_mock_server_serves_route() {
    let mut server = MockServer::new();
    server
        .route("/live.pls", MockResponse::pls("File1=http://a"))
        .await;
    let addr = server.start().await.unwrap();

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /live.pls HTTP/1.1\r\nHost: localhost\r\n\r\n")
        .await
        .unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(response.ends_with("File1=http://a"));
    assert_eq!(server.requests().await, vec!["/live.pls"]);

    server.stop().await;
}

#[tokio::test]
async fn test_mock_server_unknown_path() {
    let mut server = MockServer::new();
    let addr = server.start().await.unwrap();

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /missing.m3u HTTP/1.1\r\n\r\n")
        .await
        .unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert!(response.starts_with("HTTP/1.1 404 Not Found"));
    server.stop().await;
}

#[test]
fn test_mock_engine_without_listener() {
    let engine = MockEngine::new();
    assert!(!engine.has_listener());

    // No listener: callbacks go nowhere
    engine.report_state(EngineState::Ready, true);
    engine.report_metadata(&MetadataEvent::icy(IcyInfo::with_title("A - B")));
    assert!(engine.commands().is_empty());
}

#[tokio::test]
async fn test_static_fetcher() {
    use crate::playlist::PlaylistFetcher;

    let fetcher = StaticFetcher::new()
        .with_body("http://x/a.pls", "File1=http://a")
        .with_failure("http://x/b.pls");

    assert_eq!(fetcher.fetch_text("http://x/a.pls").await.unwrap(), "File1=http://a");
    assert!(fetcher.fetch_text("http://x/b.pls").await.is_err());
    assert_eq!(fetcher.requests(), vec!["http://x/a.pls", "http://x/b.pls"]);
}

#[tokio::test]
async fn test_static_fetcher_failure_overrides_body() {
    use crate::error::RadioError;
    use crate::playlist::PlaylistFetcher;
    use std::error::Error;

    let fetcher = StaticFetcher::new()
        .with_body("http://x/a.pls", "File1=http://a")
        .with_failure("http://x/a.pls");

    let err = fetcher.fetch_text("http://x/a.pls").await.unwrap_err();
    assert!(matches!(err, RadioError::Resolution { ref message, .. } if message == "simulated fetch failure"));
    assert!(err.source().is_some());
}

#[test]
fn test_mock_presenter_detached() {
    let presenter = Arc::new(MockPresenter::new());
    presenter.post(1, true);
    presenter.cancel(1);
    assert!(presenter.rendered().is_empty());
    assert!(presenter.calls().is_empty());
}
