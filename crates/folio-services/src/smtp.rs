// Copyright 2025 Anubhav Chaurasia
// SPDX-License-Identifier: Apache-2.0

//! SMTP transport backed by `lettre`
//!
//! Connects in plain mode on the configured port and upgrades with STARTTLS
//! when the server offers it (`Tls::Opportunistic`), authenticating with the
//! configured username and password.

use std::time::Duration;

use async_trait::async_trait;
use folio_config::SmtpConfig;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use crate::traits::{MailTransport, Mailer};
use crate::types::{MailError, OutgoingEmail};

/// Opens a fresh, unpooled SMTP transport for each relay
#[derive(Debug, Clone, Copy, Default)]
pub struct SmtpTransportFactory;

impl MailTransport for SmtpTransportFactory {
    fn open(&self, smtp: &SmtpConfig) -> Result<Box<dyn Mailer>, MailError> {
        let tls = TlsParameters::new(smtp.host.clone())
            .map_err(|e| MailError::Transport(format!("TLS setup for {}: {}", smtp.host, e)))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(smtp.host.as_str())
            .port(smtp.port)
            .tls(Tls::Opportunistic(tls))
            .credentials(Credentials::new(smtp.username.clone(), smtp.password.clone()))
            .timeout(Some(Duration::from_secs(smtp.timeout_secs)))
            .build();

        debug!(target: "folio-services", "Opened SMTP transport to {}:{}", smtp.host, smtp.port);

        Ok(Box::new(SmtpMailer { transport }))
    }
}

/// Sends [`OutgoingEmail`]s over one `lettre` transport
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let message = build_message(email)?;
        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        debug!(
            target: "folio-services",
            "SMTP accepted message for {} (code {})",
            email.to,
            response.code()
        );
        Ok(())
    }
}

/// Assemble the MIME message for an outgoing email
pub fn build_message(email: &OutgoingEmail) -> Result<Message, MailError> {
    let from = Mailbox::new(
        Some(email.from.display_name.clone()),
        parse_address(&email.from.address)?,
    );

    Message::builder()
        .from(from)
        .to(Mailbox::new(None, parse_address(&email.to)?))
        .reply_to(Mailbox::new(None, parse_address(&email.reply_to)?))
        .subject(email.subject.as_str())
        .header(ContentType::TEXT_HTML)
        .body(email.html.clone())
        .map_err(|e| MailError::Build(e.to_string()))
}

fn parse_address(address: &str) -> Result<Address, MailError> {
    address.trim().parse::<Address>().map_err(|e| MailError::Address {
        address: address.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sender;

    fn email() -> OutgoingEmail {
        OutgoingEmail {
            from: Sender {
                display_name: "Portfolio Contact Form".to_string(),
                address: "noreply@example.com".to_string(),
            },
            to: "owner@example.com".to_string(),
            reply_to: "jane@example.com".to_string(),
            subject: "New Contact Form Submission from Jane Doe".to_string(),
            html: "<p>Hello<br>World</p>".to_string(),
        }
    }

    #[test]
    fn test_build_message_headers() {
        let formatted = String::from_utf8(build_message(&email()).unwrap().formatted()).unwrap();

        assert!(formatted.contains("Portfolio Contact Form"));
        assert!(formatted.contains("<noreply@example.com>"));
        assert!(formatted.contains("To: owner@example.com"));
        assert!(formatted.contains("Reply-To: jane@example.com"));
        assert!(formatted.contains("Subject: New Contact Form Submission from Jane Doe"));
        assert!(formatted.contains("text/html"));
    }

    #[test]
    fn test_build_message_rejects_bad_address() {
        let mut bad = email();
        bad.reply_to = "not an address".to_string();
        assert!(matches!(build_message(&bad), Err(MailError::Address { .. })));
    }
}
