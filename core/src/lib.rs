//! API client core for the Students resource.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. A `Transport` executes the round-trip, and the
//! `Students` facade composes the three into the five CRUD operations.
//!
//! # Design
//! - `StudentsClient` is stateless and holds only the base resource URL.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Every response passes through `response::normalize`, which turns JSON,
//!   plain text and HTML error pages into either a `Payload` or an
//!   `ApiError` carrying a human-readable message.
//! - Payloads are validated into typed `Student` records at the facade
//!   boundary; malformed server data is an `ApiError::Decode`.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod response;
pub mod transport;
pub mod types;

pub use api::Students;
pub use client::StudentsClient;
pub use config::{BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use response::Payload;
pub use transport::{Transport, UreqTransport};
pub use types::{NewStudent, Student};
