/*!
Mail dispatch seams.

[`MailTransport`] opens a [`Mailer`] for one relay invocation; nothing is
pooled or shared between submissions.

Copyright 2025 Anubhav Chaurasia
Licensed under the Apache License, Version 2.0
*/

use async_trait::async_trait;
use folio_config::SmtpConfig;

use crate::types::{MailError, OutgoingEmail};

/// Sends fully rendered emails
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver one email. Single attempt, no retry.
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
}

/// Builds a [`Mailer`] from SMTP settings
pub trait MailTransport: Send + Sync {
    fn open(&self, smtp: &SmtpConfig) -> Result<Box<dyn Mailer>, MailError>;
}
