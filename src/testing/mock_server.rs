//! Mock playlist HTTP server for testing purposes.
//!
//! Serves canned playlist bodies over plain HTTP/1.1 so the real
//! `reqwest`-backed fetcher can be exercised without network access.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{RwLock, mpsc};

/// A canned HTTP response
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// HTTP status code
    pub status: u16,
    /// Content-Type header
    pub content_type: String,
    /// Response body
    pub body: String,
}

impl MockResponse {
    /// `200 OK` with a PLS body
    #[must_use]
    pub fn pls(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            content_type: "audio/x-scpls".to_string(),
            body: body.into(),
        }
    }

    /// `200 OK` with an M3U body
    #[must_use]
    pub fn m3u(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            content_type: "audio/x-mpegurl".to_string(),
            body: body.into(),
        }
    }

    /// Empty response with `status`
    #[must_use]
    pub fn status(status: u16) -> Self {
        Self {
            status,
            content_type: "text/plain".to_string(),
            body: String::new(),
        }
    }
}

/// Internal state of the Mock Server.
#[derive(Default)]
struct ServerState {
    /// Responses keyed by request path
    routes: HashMap<String, MockResponse>,
    /// History of requested paths
    requests: Vec<String>,
    /// Delay before answering
    latency: Duration,
}

/// A Mock playlist server.
///
/// Unknown paths answer `404 Not Found`.
pub struct MockServer {
    /// Shared server state.
    state: Arc<RwLock<ServerState>>,
    /// Channel to signal shutdown to the server task.
    shutdown: Option<mpsc::Sender<()>>,
    /// The local address the server is listening on.
    address: Option<SocketAddr>,
}

impl MockServer {
    /// Creates a new `MockServer` with no routes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(ServerState::default())),
            shutdown: None,
            address: None,
        }
    }

    /// Serve `response` for `path`.
    pub async fn route(&self, path: &str, response: MockResponse) {
        self.state
            .write()
            .await
            .routes
            .insert(path.to_string(), response);
    }

    /// Delay every response by `latency`.
    pub async fn set_latency(&self, latency: Duration) {
        self.state.write().await.latency = latency;
    }

    /// Starts the server on an ephemeral localhost port.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP listener cannot be bound.
    pub async fn start(&mut self) -> Result<SocketAddr, std::io::Error> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        self.address = Some(addr);

        let (shutdown_tx, mut shutdown_rx) = mpsc::channel(1);
        self.shutdown = Some(shutdown_tx);

        let state = self.state.clone();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    accepted = listener.accept() => {
                        match accepted {
                            Ok((stream, _)) => {
                                let state = state.clone();
                                tokio::spawn(async move {
                                    if let Err(e) = handle_connection(stream, state).await {
                                        tracing::debug!("Mock server connection error: {}", e);
                                    }
                                });
                            }
                            Err(e) => {
                                tracing::warn!("Mock server accept failed: {}", e);
                                break;
                            }
                        }
                    }
                    _ = shutdown_rx.recv() => break,
                }
            }
        });

        Ok(addr)
    }

    /// Absolute URL for `path` on this server.
    ///
    /// # Panics
    ///
    /// Panics if the server has not been started.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        let addr = self.address.expect("mock server not started");
        format!("http://{addr}{path}")
    }

    /// Paths requested so far.
    pub async fn requests(&self) -> Vec<String> {
        self.state.read().await.requests.clone()
    }

    /// Stops the server.
    pub async fn stop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(()).await;
        }
    }
}

impl Default for MockServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn handle_connection(
    mut stream: TcpStream,
    state: Arc<RwLock<ServerState>>,
) -> std::io::Result<()> {
    let mut buf = Vec::with_capacity(1024);
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let head = String::from_utf8_lossy(&buf);
    let path = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();

    let (response, latency) = {
        let mut state = state.write().await;
        state.requests.push(path.clone());
        let response = state
            .routes
            .get(&path)
            .cloned()
            .unwrap_or_else(|| MockResponse::status(404));
        (response, state.latency)
    };

    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }

    let reason = match response.status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let reply = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        reason,
        response.content_type,
        response.body.len(),
        response.body
    );
    stream.write_all(reply.as_bytes()).await?;
    stream.shutdown().await
}
