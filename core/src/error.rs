//! Error types for the harness.
//!
//! # Design
//! Configuration problems fail fast with a message naming the file, section or
//! key at fault. `ApiError` covers only what the client itself can get wrong
//! (transport, payload encoding, body decoding); a non-2xx status is data, and
//! becomes `NotFound`/`HttpError` only when a caller opts in through
//! `HttpResponse::error_for_status`.

use std::path::PathBuf;

/// Errors raised while loading the INI configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration file not found at: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to parse configuration file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    #[error("section '{section}' not found in the configuration file")]
    MissingSection { section: String },

    #[error("section '{section}' appears more than once in the configuration file")]
    DuplicateSection { section: String },

    #[error("'{key}' not found in section '{section}'")]
    MissingKey { section: String, key: String },

    #[error("'{key}' in section '{section}' is empty")]
    EmptyValue { section: String, key: String },
}

/// Errors returned by `UserClient` and `HttpResponse` helpers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404. Only produced by `error_for_status`.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The request never produced a response (DNS, connect, TLS, I/O).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

/// Errors raised while reading JSON fixtures from disk.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to read fixture {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("fixture {} is not valid JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised by `SchemaValidator`.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    #[error("instance does not match schema: {}", .errors.join("; "))]
    Violations { errors: Vec<String> },
}
