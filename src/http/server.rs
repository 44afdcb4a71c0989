//! HTTP server setup and lifecycle.
//!
//! # Responsibilities
//! - Create the Axum router with a single wildcard route
//! - Wire up middleware (request ID, tracing)
//! - Serve on an already bound listener
//! - Stop accepting on shutdown and drain in-flight requests up to the
//!   configured grace period

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use axum::{routing::any, Router};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinError;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::http::handler::serve_contents;
use crate::http::request::{request_id_layer, request_span};
use crate::lifecycle::shutdown::{drain_within, Drain};
use crate::lifecycle::ServerState;

/// Errors that end the serve loop.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serve task failed: {0}")]
    Task(#[from] JoinError),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

/// HTTP server answering every path with the configured payload.
pub struct HttpServer {
    router: Router,
    config: Arc<ServerConfig>,
    state_tx: watch::Sender<ServerState>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let config = Arc::new(config);
        let state = AppState {
            config: config.clone(),
        };
        let (state_tx, _) = watch::channel(ServerState::Stopped);

        Self {
            router: Self::build_router(state),
            config,
            state_tx,
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", any(serve_contents))
            .route("/{*path}", any(serve_contents))
            .with_state(state)
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(request_id_layer())
    }

    /// A handle to the router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Observe `Stopped → Listening → ShuttingDown → Stopped` transitions.
    pub fn subscribe_state(&self) -> watch::Receiver<ServerState> {
        self.state_tx.subscribe()
    }

    /// Run the server until `shutdown` fires and in-flight requests drain.
    ///
    /// New connections are refused as soon as the signal arrives. Requests
    /// still running after the grace period are abandoned; they are torn
    /// down when the runtime exits.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        let grace = Duration::from_secs(self.config.shutdown.grace_period_secs);
        let mut drain_signal = shutdown.resubscribe();

        let serve = axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            });
        let mut serving = tokio::spawn(serve.into_future());

        self.state_tx.send_replace(ServerState::Listening);
        tracing::info!(
            address = %addr,
            mode = %self.config.content.mode,
            "HTTP server listening"
        );

        tokio::select! {
            result = &mut serving => {
                self.state_tx.send_replace(ServerState::Stopped);
                return flatten(result);
            }
            _ = drain_signal.recv() => {}
        }

        self.state_tx.send_replace(ServerState::ShuttingDown);
        tracing::info!(grace_secs = grace.as_secs(), "HTTP server is shutting down");

        let result = match drain_within(&mut serving, grace).await {
            Drain::Completed(result) => flatten(result),
            Drain::DeadlineElapsed => {
                tracing::warn!(
                    grace_secs = grace.as_secs(),
                    "grace period elapsed, closing remaining connections"
                );
                serving.abort();
                Ok(())
            }
        };

        self.state_tx.send_replace(ServerState::Stopped);
        tracing::info!("HTTP server stopped");
        result
    }
}

fn flatten(result: Result<std::io::Result<()>, JoinError>) -> Result<(), ServerError> {
    Ok(result??)
}
