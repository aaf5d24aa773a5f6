//! Test harness core for the JSONPlaceholder users API.
//!
//! # Overview
//! Reads the API base URL from an INI file, issues one blocking HTTP call per
//! REST operation, and returns each response unmodified so tests can assert on
//! status, body and schema.
//!
//! # Design
//! - `UserClient` holds only a base URL and a `Transport`; it is read-only
//!   after construction and can be shared across a whole test binary.
//! - Requests are built by pure `build_*` methods, so URL and payload shape
//!   are testable without a network.
//! - Configuration errors fail fast; HTTP statuses are data.
//! - Schema checks go straight to the `jsonschema` crate.

pub mod client;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod http;
pub mod schema;
pub mod transport;
pub mod types;

pub use client::UserClient;
pub use error::{ApiError, ConfigError, FixtureError, SchemaError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use schema::SchemaValidator;
pub use transport::{Transport, UreqTransport};
pub use types::{Address, Company, Geo, User};
