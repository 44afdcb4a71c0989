//! Request-scoped payload wrapper.

use std::io;

use axum::body::Bytes;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use md5::{Digest, Md5};
use thiserror::Error;

use super::fixtures::{CSV_TEXT, SQL_TEXT};
use super::ContentMode;

/// Errors produced while deriving payload metadata.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The digest could not consume the payload buffer.
    #[error("failed to digest payload: {0}")]
    Digest(#[from] io::Error),
}

/// Immutable payload handed to a single response.
///
/// Length and checksum are derived from the bytes on every call; nothing
/// is cached and nothing is shared with other requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    bytes: Bytes,
}

impl Content {
    /// Wrap an arbitrary payload.
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self { bytes: bytes.into() }
    }

    /// Build the payload for the configured mode.
    pub fn for_mode(mode: ContentMode) -> Self {
        match mode {
            ContentMode::Csv => Self::csv(),
            ContentMode::Sql => Self::sql(),
        }
    }

    pub fn csv() -> Self {
        Self::new(Bytes::from_static(CSV_TEXT.as_bytes()))
    }

    pub fn sql() -> Self {
        Self::new(Bytes::from_static(SQL_TEXT.as_bytes()))
    }

    /// Byte count of the payload.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Read-only view of the payload.
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Base64 (standard alphabet, padded) of the MD5 digest of the payload.
    pub fn checksum(&self) -> Result<String, ContentError> {
        let mut hasher = Md5::new();
        io::copy(&mut &self.bytes[..], &mut hasher)?;
        Ok(STANDARD.encode(hasher.finalize()))
    }
}
