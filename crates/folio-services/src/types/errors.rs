// Copyright 2025 Anubhav Chaurasia
// SPDX-License-Identifier: Apache-2.0

/*!
Service layer error types.

Transport-agnostic errors. The `Display` text of every [`ServiceError`] is
the human-readable message returned to the submitter; adapters map the
variant to a status code.

Copyright 2025 Anubhav Chaurasia
Licensed under the Apache License, Version 2.0
*/

use thiserror::Error;

/// Failure reported by a mail transport
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MailError {
    /// An address could not be parsed into a mailbox
    #[error("Invalid mailbox '{address}': {reason}")]
    Address { address: String, reason: String },

    /// The MIME message could not be assembled
    #[error("Failed to build message: {0}")]
    Build(String),

    /// Connection, TLS, authentication or SMTP protocol failure
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Service layer errors (transport-agnostic)
#[derive(Error, Debug, Clone)]
pub enum ServiceError {
    /// A required field is absent or blank (400 in HTTP)
    #[error("Missing Required Fields")]
    MissingField { field: &'static str },

    /// Email does not match `local@domain.tld` (400 in HTTP)
    #[error("Invalid Email Address")]
    InvalidEmail,

    /// SMTP settings needed for delivery are absent (500 in HTTP)
    #[error("SMTP Configuration Is Incomplete. Please Check Your .env File.")]
    Configuration { missing: Vec<&'static str> },

    /// The admin notification could not be delivered (500 in HTTP)
    #[error("Failed To Send Email. Please Check SMTP Configuration.")]
    Delivery(#[source] MailError),

    /// The sender confirmation could not be delivered. Logged, never returned
    /// by the relay.
    #[error("Confirmation Email Error: {0}")]
    ConfirmationDelivery(#[source] MailError),
}

impl ServiceError {
    /// Whether the submitter can fix this by resubmitting different input
    pub fn is_client_error(&self) -> bool {
        matches!(self, ServiceError::MissingField { .. } | ServiceError::InvalidEmail)
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_user_visible_messages() {
        assert_eq!(
            ServiceError::MissingField { field: "name" }.to_string(),
            "Missing Required Fields"
        );
        assert_eq!(ServiceError::InvalidEmail.to_string(), "Invalid Email Address");
        assert!(ServiceError::Configuration { missing: vec!["smtp.password"] }
            .to_string()
            .starts_with("SMTP Configuration Is Incomplete."));
    }

    #[test]
    fn test_delivery_keeps_transport_cause() {
        let err = ServiceError::Delivery(MailError::Transport("connection refused".to_string()));
        assert_eq!(
            err.to_string(),
            "Failed To Send Email. Please Check SMTP Configuration."
        );
        assert!(err.source().unwrap().to_string().contains("connection refused"));
        assert!(!err.is_client_error());
    }
}
