//! Import metadata headers.
//!
//! The header set is a pure function of the content mode. `Content-Length`
//! and `X-Import-Md5` depend on the payload and are added by the handler.

use axum::http::header::{HeaderMap, HeaderName, HeaderValue};

use crate::content::ContentMode;

pub const X_IMPORT_FILENAME: &str = "x-import-filename";
pub const X_IMPORT_TABLE: &str = "x-import-table";
pub const X_IMPORT_OPERATION: &str = "x-import-operation";
pub const X_IMPORT_PRIMARY_KEYS: &str = "x-import-primary-keys";
pub const X_IMPORT_MD5: &str = "x-import-md5";

/// Header name and value, both lowercase-safe static strings.
pub type HeaderPair = (&'static str, &'static str);

const CSV_HEADERS: &[HeaderPair] = &[
    ("content-type", "text/csv"),
    (X_IMPORT_FILENAME, "transformed.csv"),
    (X_IMPORT_TABLE, "csv_table"),
    (X_IMPORT_OPERATION, "overwrite"),
    (X_IMPORT_PRIMARY_KEYS, "pk"),
    (X_IMPORT_PRIMARY_KEYS, "col1"),
];

const SQL_HEADERS: &[HeaderPair] = &[
    ("content-type", "application/sql"),
    (X_IMPORT_FILENAME, "transformed.sql"),
];

/// Ordered header set for `mode`. Repeated names are separate values.
pub fn import_headers(mode: ContentMode) -> &'static [HeaderPair] {
    match mode {
        ContentMode::Csv => CSV_HEADERS,
        ContentMode::Sql => SQL_HEADERS,
    }
}

/// Append the header set for `mode`, keeping repeated names in order.
pub fn write_import_headers(headers: &mut HeaderMap, mode: ContentMode) {
    for &(name, value) in import_headers(mode) {
        headers.append(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
}
