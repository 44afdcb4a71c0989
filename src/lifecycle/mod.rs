//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     Trigger → Stop accepting → Drain in-flight (bounded) → Exit
//!
//! Server states:
//!     Stopped → Listening → ShuttingDown → Stopped
//! ```
//!
//! # Design Decisions
//! - Binding happens before the server runs: a busy port is fatal at startup
//! - Shutdown has a deadline: remaining requests are abandoned after it

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;

/// Externally visible server phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    Stopped,
    Listening,
    ShuttingDown,
}
