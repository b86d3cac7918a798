// Copyright 2025 Anubhav Chaurasia
// SPDX-License-Identifier: Apache-2.0

// Wire DTOs for the HTTP API

use folio_services::ContactRequest;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Contact form submission
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SendEmailRequest {
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    #[schema(example = "Hello!")]
    pub message: Option<String>,
}

impl From<SendEmailRequest> for ContactRequest {
    fn from(request: SendEmailRequest) -> Self {
        ContactRequest {
            name: request.name,
            email: request.email,
            message: request.message,
        }
    }
}

/// Liveness and configuration summary
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Whether SMTP settings are complete enough to attempt delivery
    pub smtp_configured: bool,
}
