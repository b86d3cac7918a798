use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use utoipa::ToSchema;

use super::ContactResponse;

/// API error codes
///
/// Only the HTTP status is exposed to clients; the code is kept for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorCode {
    UnsupportedMethod,
    MissingField,
    InvalidEmail,
    ConfigurationError,
    DeliveryError,
    NotFound,
    Internal,
}

impl ApiErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            ApiErrorCode::UnsupportedMethod => StatusCode::METHOD_NOT_ALLOWED,
            ApiErrorCode::MissingField | ApiErrorCode::InvalidEmail => StatusCode::BAD_REQUEST,
            ApiErrorCode::NotFound => StatusCode::NOT_FOUND,
            ApiErrorCode::ConfigurationError
            | ApiErrorCode::DeliveryError
            | ApiErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// API error type, rendered as `{"success": false, "message": ...}`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
    pub code: ApiErrorCode,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ApiError {
    pub fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }

    pub fn method_not_allowed() -> Self {
        Self::new(ApiErrorCode::UnsupportedMethod, "Method Not Allowed")
    }

    pub fn not_found() -> Self {
        Self::new(ApiErrorCode::NotFound, "Not Found")
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::Internal, message)
    }

    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

/// Convert service layer errors to API errors
impl From<folio_services::ServiceError> for ApiError {
    fn from(err: folio_services::ServiceError) -> Self {
        use folio_services::ServiceError;

        let code = match &err {
            ServiceError::MissingField { .. } => ApiErrorCode::MissingField,
            ServiceError::InvalidEmail => ApiErrorCode::InvalidEmail,
            ServiceError::Configuration { .. } => ApiErrorCode::ConfigurationError,
            ServiceError::Delivery(_) | ServiceError::ConfirmationDelivery(_) => {
                ApiErrorCode::DeliveryError
            }
        };
        ApiError::new(code, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ContactResponse::failure(self.message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_services::{MailError, ServiceError};

    #[test]
    fn test_service_error_mapping() {
        let cases = [
            (ServiceError::MissingField { field: "name" }, StatusCode::BAD_REQUEST),
            (ServiceError::InvalidEmail, StatusCode::BAD_REQUEST),
            (
                ServiceError::Configuration { missing: vec!["SMTP_FROM"] },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ServiceError::Delivery(MailError::Transport("timeout".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (service_error, status) in cases {
            let message = service_error.to_string();
            let api_error = ApiError::from(service_error);
            assert_eq!(api_error.status(), status);
            assert_eq!(api_error.message, message);
        }
    }

    #[test]
    fn test_delivery_message_hides_transport_detail() {
        let api_error = ApiError::from(ServiceError::Delivery(MailError::Transport(
            "535 5.7.8 Username and Password not accepted".to_string(),
        )));
        assert!(!api_error.message.contains("535"));
        assert!(api_error.message.starts_with("Failed To Send Email"));
    }
}
