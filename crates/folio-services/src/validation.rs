// Copyright 2025 Anubhav Chaurasia
// SPDX-License-Identifier: Apache-2.0

//! Submission validation
//!
//! Order matters: missing fields are reported before a bad email address.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::{ContactRequest, ContactSubmission, ServiceError, ServiceResult};

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

/// Check an address against the `local@domain.tld` pattern
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Validate a raw request and trim the accepted fields
///
/// The email pattern is matched against the value as submitted, so padding
/// around an address is rejected rather than trimmed away.
///
/// # Errors
/// * `ServiceError::MissingField` - a field is absent or blank after trimming
/// * `ServiceError::InvalidEmail` - the submitted email fails the pattern
pub fn validate_submission(request: ContactRequest) -> ServiceResult<ContactSubmission> {
    let name = required(request.name.as_deref(), "name")?;
    let email = required(request.email.as_deref(), "email")?;
    let message = required(request.message.as_deref(), "message")?;

    if !request.email.as_deref().is_some_and(is_valid_email) {
        return Err(ServiceError::InvalidEmail);
    }

    Ok(ContactSubmission { name, email, message })
}

fn required(value: Option<&str>, field: &'static str) -> ServiceResult<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(ServiceError::MissingField { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_boundary() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("jane.doe+site@mail.example.co.uk"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("jane doe@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@.com"));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let submission = validate_submission(ContactRequest::new(
            "  Jane Doe ",
            "jane@example.com",
            "\nHello\nWorld\n\n",
        ))
        .unwrap();

        assert_eq!(submission.name(), "Jane Doe");
        assert_eq!(submission.email(), "jane@example.com");
        assert_eq!(submission.message(), "Hello\nWorld");
    }

    #[test]
    fn test_padded_email_rejected() {
        for email in [" jane@example.com", "jane@example.com\t", "\njane@example.com "] {
            let err = validate_submission(ContactRequest::new("Jane", email, "Hi")).unwrap_err();
            assert!(matches!(err, ServiceError::InvalidEmail), "email: {:?}", email);
        }
    }

    #[test]
    fn test_blank_email_is_missing_not_invalid() {
        let err = validate_submission(ContactRequest::new("Jane", "   ", "Hi")).unwrap_err();
        assert!(matches!(err, ServiceError::MissingField { field: "email" }));
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let err = validate_submission(ContactRequest::new("Jane", "jane@example.com", "   \n "))
            .unwrap_err();
        assert!(matches!(err, ServiceError::MissingField { field: "message" }));
    }

    #[test]
    fn test_absent_field_is_missing() {
        let request = ContactRequest {
            name: Some("Jane".to_string()),
            email: None,
            message: Some("Hi".to_string()),
        };
        let err = validate_submission(request).unwrap_err();
        assert!(matches!(err, ServiceError::MissingField { field: "email" }));
    }

    #[test]
    fn test_missing_field_reported_before_invalid_email() {
        let err = validate_submission(ContactRequest::new("", "not-an-email", "Hi")).unwrap_err();
        assert!(matches!(err, ServiceError::MissingField { field: "name" }));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let err = validate_submission(ContactRequest::new("Jane", "a@b", "Hi")).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidEmail));
    }
}
