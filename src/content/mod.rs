//! Response payloads.
//!
//! # Data Flow
//! ```text
//! ContentMode (fixed at startup)
//!     → fixtures.rs (static CSV / SQL text)
//!     → holder.rs (request-scoped Content: bytes, length, checksum)
//!     → http handler writes it out
//! ```
//!
//! Payloads are immutable; a fresh `Content` is built per request and
//! dropped once the response has been produced.

pub mod fixtures;
pub mod holder;

use serde::{Deserialize, Serialize};

pub use holder::{Content, ContentError};

/// Which payload (and header set) the server answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentMode {
    #[default]
    Csv,
    Sql,
}

impl ContentMode {
    /// Maps the `--sql` flag onto a mode.
    pub fn from_sql_flag(sql: bool) -> Self {
        if sql {
            ContentMode::Sql
        } else {
            ContentMode::Csv
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentMode::Csv => "csv",
            ContentMode::Sql => "sql",
        }
    }
}

impl std::fmt::Display for ContentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
