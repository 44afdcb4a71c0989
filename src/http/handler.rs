//! Request handler: validate, pick the payload, write headers and body.
//!
//! # Flow
//! ```text
//! method != POST            → 400 "only POST requests supported."
//! Content-Type absent/empty → 400, empty body
//! checksum failure          → 500, empty body
//! otherwise                 → 200, import headers + payload
//! ```
//!
//! The `Content-Type` value is only checked for presence, never matched
//! against a list of accepted types.

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};

use crate::content::{Content, ContentMode};
use crate::http::headers::{write_import_headers, X_IMPORT_MD5};
use crate::http::server::AppState;

/// Body sent with a non-POST rejection.
pub const METHOD_REJECTION: &str = "only POST requests supported.";

/// Entry point for every path.
pub async fn serve_contents(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
) -> Response {
    respond(state.config.content.mode, &method, &headers)
}

fn respond(mode: ContentMode, method: &Method, headers: &HeaderMap) -> Response {
    if method != Method::POST {
        tracing::warn!(method = %method, "received unsupported request method");
        return (StatusCode::BAD_REQUEST, METHOD_REJECTION).into_response();
    }

    tracing::info!("received request");

    let has_content_type = headers
        .get(header::CONTENT_TYPE)
        .is_some_and(|v| !v.is_empty());
    if !has_content_type {
        tracing::warn!("no request content-type header set");
        return StatusCode::BAD_REQUEST.into_response();
    }

    for (name, value) in headers {
        tracing::debug!(header = %name, value = ?value, "request header");
    }

    let content = Content::for_mode(mode);

    tracing::info!(
        content_length = content.len(),
        status_code = StatusCode::OK.as_u16(),
        mode = %mode,
        "serving payload"
    );

    let checksum = match content.checksum() {
        Ok(sum) => sum,
        Err(e) => {
            tracing::error!(error = %e, "checksum computation failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let mut response = Response::new(Body::empty());
    let response_headers = response.headers_mut();
    response_headers.insert(header::CONTENT_LENGTH, HeaderValue::from(content.len()));
    write_import_headers(response_headers, mode);
    match HeaderValue::from_str(&checksum) {
        Ok(value) => {
            response_headers.insert(X_IMPORT_MD5, value);
        }
        Err(e) => {
            tracing::error!(error = %e, "checksum is not a valid header value");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    }

    let body = checked_body(response.headers(), content.bytes().clone());
    *response.body_mut() = body;
    *response.status_mut() = StatusCode::OK;

    response
}

/// Hand `payload` to the transport, asserting it matches the declared
/// `Content-Length`.
///
/// A mismatch means the response contract is broken, not that the request
/// was bad, so it panics instead of producing an error response.
fn checked_body(headers: &HeaderMap, payload: Bytes) -> Body {
    let declared = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());
    assert_eq!(declared, Some(payload.len()), "failed to write all contents");
    Body::from(payload)
}
