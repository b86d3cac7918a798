// Copyright 2025 Anubhav Chaurasia
// SPDX-License-Identifier: Apache-2.0

// Common types used across endpoints

pub mod dtos;
pub mod error;
pub mod response;

pub use dtos::{HealthResponse, SendEmailRequest};
pub use error::{ApiError, ApiErrorCode};
pub use response::ContactResponse;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
