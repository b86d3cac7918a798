// Copyright 2025 Anubhav Chaurasia
// SPDX-License-Identifier: Apache-2.0

/*!
Contact relay service implementation.

Received → Validated → AdminEmailSent → (ConfirmationAttempted) → Responded.
Validation failures return before any network activity.

Copyright 2025 Anubhav Chaurasia
Licensed under the Apache License, Version 2.0
*/

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use folio_config::{BrandingConfig, SmtpConfig};
use tracing::{error, info, warn};

use crate::templates::{
    admin_subject, render_admin_email, render_confirmation_email, CONFIRMATION_SUBJECT,
};
use crate::traits::{ContactService, MailTransport};
use crate::types::*;
use crate::validation::validate_submission;

/// Default implementation of ContactService
///
/// Holds read-only settings; every call opens its own mailer.
pub struct ContactServiceImpl {
    smtp: SmtpConfig,
    branding: BrandingConfig,
    transport: Arc<dyn MailTransport>,
}

impl ContactServiceImpl {
    /// Create a new ContactServiceImpl
    pub fn new(smtp: SmtpConfig, branding: BrandingConfig, transport: Arc<dyn MailTransport>) -> Self {
        Self {
            smtp,
            branding,
            transport,
        }
    }

    /// Names of the SMTP settings that still need a value
    pub fn missing_smtp_settings(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.smtp.username.trim().is_empty() {
            missing.push("SMTP_USERNAME");
        }
        if self.smtp.password.is_empty() {
            missing.push("SMTP_PASSWORD");
        }
        if self.smtp.from_address.trim().is_empty() {
            missing.push("SMTP_FROM");
        }
        if self.smtp.recipient().is_none() {
            missing.push("SMTP_TO");
        }
        missing
    }

    fn sender(&self) -> Sender {
        Sender {
            display_name: self.smtp.from_name.clone(),
            address: self.smtp.from_address.clone(),
        }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn relay(&self, request: ContactRequest) -> ServiceResult<ContactOutcome> {
        let submission = validate_submission(request).map_err(|e| {
            warn!(target: "folio-services", "Rejected contact submission: {:?}", e);
            e
        })?;

        let recipient = match self.smtp.recipient() {
            Some(recipient) if self.smtp.is_complete() => recipient.to_string(),
            _ => {
                let missing = self.missing_smtp_settings();
                error!(target: "folio-services", "SMTP configuration incomplete, missing: {}", missing.join(", "));
                return Err(ServiceError::Configuration { missing });
            }
        };

        let mailer = self.transport.open(&self.smtp).map_err(|e| {
            error!(target: "folio-services", "Email Error: {}", e);
            ServiceError::Delivery(e)
        })?;

        let admin_email = OutgoingEmail {
            from: self.sender(),
            to: recipient,
            reply_to: submission.email().to_string(),
            subject: admin_subject(&submission),
            html: render_admin_email(&submission, &self.branding, Utc::now()),
        };

        mailer.send(&admin_email).await.map_err(|e| {
            error!(target: "folio-services", "Email Error: {}", e);
            ServiceError::Delivery(e)
        })?;

        info!(
            target: "folio-services",
            "Relayed contact submission from {} to {}",
            submission.email(),
            admin_email.to
        );

        let confirmation_email = OutgoingEmail {
            from: self.sender(),
            to: submission.email().to_string(),
            reply_to: self.smtp.from_address.clone(),
            subject: CONFIRMATION_SUBJECT.to_string(),
            html: render_confirmation_email(&submission, &self.branding),
        };

        let confirmation_sent = match mailer.send(&confirmation_email).await {
            Ok(()) => true,
            Err(e) => {
                let err = ServiceError::ConfirmationDelivery(e);
                error!(target: "folio-services", "{}", err);
                false
            }
        };

        Ok(ContactOutcome { confirmation_sent })
    }

    fn smtp_configured(&self) -> bool {
        self.smtp.is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailurePlan, RecordingTransport};

    fn complete_smtp() -> SmtpConfig {
        SmtpConfig {
            username: "owner@example.com".to_string(),
            password: "app-password".to_string(),
            from_address: "noreply@example.com".to_string(),
            ..SmtpConfig::default()
        }
    }

    fn service(smtp: SmtpConfig, transport: &RecordingTransport) -> ContactServiceImpl {
        ContactServiceImpl::new(smtp, BrandingConfig::default(), Arc::new(transport.clone()))
    }

    fn jane() -> ContactRequest {
        ContactRequest::new("Jane Doe", "jane@example.com", "Hello\nWorld")
    }

    #[tokio::test]
    async fn test_relay_sends_admin_then_confirmation() {
        let transport = RecordingTransport::new();
        let outcome = service(complete_smtp(), &transport).relay(jane()).await.unwrap();

        assert!(outcome.confirmation_sent);
        assert_eq!(outcome.message(), "Email Sent Successfully - Confirmation Sent");

        let sent = transport.delivered();
        assert_eq!(sent.len(), 2);

        let admin = &sent[0];
        assert_eq!(admin.to, "owner@example.com");
        assert_eq!(admin.reply_to, "jane@example.com");
        assert_eq!(admin.subject, "New Contact Form Submission from Jane Doe");
        assert_eq!(admin.from.display_name, "Portfolio Contact Form");
        assert_eq!(admin.from.address, "noreply@example.com");
        assert!(admin.html.contains("Hello<br>World"));

        let confirmation = &sent[1];
        assert_eq!(confirmation.to, "jane@example.com");
        assert_eq!(confirmation.reply_to, "noreply@example.com");
        assert_eq!(confirmation.subject, CONFIRMATION_SUBJECT);
    }

    #[tokio::test]
    async fn test_explicit_recipient_wins() {
        let transport = RecordingTransport::new();
        let smtp = SmtpConfig {
            recipient: "inbox@example.com".to_string(),
            ..complete_smtp()
        };
        service(smtp, &transport).relay(jane()).await.unwrap();
        assert_eq!(transport.delivered()[0].to, "inbox@example.com");
    }

    #[tokio::test]
    async fn test_incomplete_configuration_sends_nothing() {
        let transport = RecordingTransport::new();
        let smtp = SmtpConfig {
            password: String::new(),
            ..complete_smtp()
        };
        let svc = service(smtp, &transport);
        assert!(!svc.smtp_configured());

        match svc.relay(jane()).await {
            Err(ServiceError::Configuration { missing }) => assert_eq!(missing, vec!["SMTP_PASSWORD"]),
            other => panic!("expected configuration error, got {:?}", other),
        }
        assert_eq!(transport.opened(), 0);
    }

    #[tokio::test]
    async fn test_validation_runs_before_configuration_check() {
        let transport = RecordingTransport::new();
        let err = service(SmtpConfig::default(), &transport)
            .relay(ContactRequest::new("Jane", "a@b", "Hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidEmail));
    }

    #[tokio::test]
    async fn test_admin_failure_skips_confirmation() {
        let transport = RecordingTransport::with_plan(FailurePlan {
            fail_admin: true,
            ..FailurePlan::default()
        });
        let err = service(complete_smtp(), &transport).relay(jane()).await.unwrap_err();

        assert!(matches!(err, ServiceError::Delivery(_)));
        assert_eq!(transport.attempts().len(), 1);
        assert!(transport.delivered().is_empty());
    }

    #[tokio::test]
    async fn test_open_failure_is_delivery_error() {
        let transport = RecordingTransport::with_plan(FailurePlan {
            fail_open: true,
            ..FailurePlan::default()
        });
        let err = service(complete_smtp(), &transport).relay(jane()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Delivery(MailError::Transport(_))));
    }

    #[tokio::test]
    async fn test_confirmation_failure_is_swallowed() {
        let transport = RecordingTransport::with_plan(FailurePlan {
            fail_confirmation: true,
            ..FailurePlan::default()
        });
        let outcome = service(complete_smtp(), &transport).relay(jane()).await.unwrap();

        assert!(!outcome.confirmation_sent);
        assert_eq!(outcome.message(), "Email Sent Successfully");
        assert_eq!(transport.attempts().len(), 2);
        assert_eq!(transport.delivered().len(), 1);
    }

    #[tokio::test]
    async fn test_resubmission_is_not_deduplicated() {
        let transport = RecordingTransport::new();
        let svc = service(complete_smtp(), &transport);
        svc.relay(jane()).await.unwrap();
        svc.relay(jane()).await.unwrap();

        assert_eq!(transport.opened(), 2);
        assert_eq!(transport.delivered().len(), 4);
    }
}
