//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig (host, port)
//!     → listener.rs (bind, fail fast on busy port)
//!     → Hand off to HTTP layer
//! ```
//!
//! Accepting and per-connection tasks are owned by the HTTP server; there
//! is no connection limit or pool sizing.

pub mod listener;

pub use listener::{bind_listener, ListenerError};
