// Copyright 2025 Anubhav Chaurasia
// SPDX-License-Identifier: Apache-2.0

// Folio HTTP API Layer
//
// Axum adapter over the transport-agnostic contact service. Endpoints return
// `{success, message}` bodies and map service errors to HTTP status codes.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod common;
pub mod endpoints;
pub mod middleware;
pub mod openapi;
pub mod transports;

// Re-export commonly used types
pub use common::{ApiError, ApiErrorCode, ApiResult, ContactResponse};
pub use transports::http::server::{create_http_server, ApiState};
