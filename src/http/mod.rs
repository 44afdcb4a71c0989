//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, graceful shutdown)
//!     → request.rs (request ID, tracing span)
//!     → handler.rs (method / Content-Type checks, payload selection)
//!     → headers.rs (import metadata for the content mode)
//!     → Send to client
//! ```

pub mod handler;
pub mod headers;
pub mod request;
pub mod server;

pub use handler::METHOD_REJECTION;
pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer, ServerError};
