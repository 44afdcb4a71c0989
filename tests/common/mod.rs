//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::time::Duration;

use import_fixture_server::config::ServerConfig;
use import_fixture_server::http::{HttpServer, ServerError};
use import_fixture_server::lifecycle::{ServerState, Shutdown};
use import_fixture_server::ContentMode;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// A server running on an ephemeral loopback port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub state: watch::Receiver<ServerState>,
    pub handle: JoinHandle<Result<(), ServerError>>,
}

#[allow(dead_code)]
impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Wait until the server reports `state`, failing after five seconds.
    pub async fn wait_for(&mut self, state: ServerState) {
        tokio::time::timeout(Duration::from_secs(5), self.state.wait_for(|s| *s == state))
            .await
            .expect("timed out waiting for server state")
            .expect("server state channel closed");
    }
}

/// Start the server in `mode` and wait until it is listening.
pub async fn start_server(mode: ContentMode) -> TestServer {
    let mut config = ServerConfig::default();
    config.content.mode = mode;
    start_server_with(config).await
}

/// Start the server with an explicit configuration.
pub async fn start_server_with(config: ServerConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let state = server.subscribe_state();
    let server_shutdown = shutdown.subscribe();

    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    let mut server = TestServer {
        addr,
        shutdown,
        state,
        handle,
    };
    server.wait_for(ServerState::Listening).await;
    server
}

/// HTTP client without connection pooling or proxies.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
