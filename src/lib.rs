//! Import fixture server.
//!
//! Answers every POST with one of two canned import payloads (a CSV sample
//! or a SQL script) plus the metadata headers a downstream importer reads.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client POST                ┌──────────────────────────────────────────┐
//!     ───────────────────────────┼─▶ net::listener ─▶ http::server          │
//!                                │                      │                   │
//!                                │                      ▼                   │
//!                                │               http::handler              │
//!                                │               │            │             │
//!                                │               ▼            ▼             │
//!     200 + headers + payload    │     content::Content   http::headers     │
//!     ◀──────────────────────────┼── (bytes, len, md5)   (per ContentMode)  │
//!                                │                                          │
//!                                │  config · lifecycle · observability      │
//!                                └──────────────────────────────────────────┘
//! ```

pub mod config;
pub mod content;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::ServerConfig;
pub use content::{Content, ContentMode};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
