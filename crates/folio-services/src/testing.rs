// Copyright 2025 Anubhav Chaurasia
// SPDX-License-Identifier: Apache-2.0

//! In-memory mail transport for tests
//!
//! Records every email handed to it and can be told to fail the admin
//! notification, the confirmation, or opening the transport itself.

use std::sync::Arc;

use async_trait::async_trait;
use folio_config::SmtpConfig;
use parking_lot::Mutex;

use crate::traits::{MailTransport, Mailer};
use crate::types::{MailError, OutgoingEmail};

/// Which sends should fail
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FailurePlan {
    pub fail_open: bool,
    /// Fail the first send of each opened mailer (the admin notification)
    pub fail_admin: bool,
    /// Fail every send after the first (the confirmation)
    pub fail_confirmation: bool,
}

/// Shared log of attempted sends
#[derive(Debug, Default)]
struct Record {
    attempts: Vec<OutgoingEmail>,
    delivered: Vec<OutgoingEmail>,
    opened: usize,
}

/// A [`MailTransport`] that records instead of sending
#[derive(Clone, Default)]
pub struct RecordingTransport {
    plan: FailurePlan,
    record: Arc<Mutex<Record>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plan(plan: FailurePlan) -> Self {
        Self {
            plan,
            record: Arc::default(),
        }
    }

    /// Every email a mailer was asked to send, in order
    pub fn attempts(&self) -> Vec<OutgoingEmail> {
        self.record.lock().attempts.clone()
    }

    /// Emails that were accepted
    pub fn delivered(&self) -> Vec<OutgoingEmail> {
        self.record.lock().delivered.clone()
    }

    /// Number of mailers opened
    pub fn opened(&self) -> usize {
        self.record.lock().opened
    }
}

impl MailTransport for RecordingTransport {
    fn open(&self, _smtp: &SmtpConfig) -> Result<Box<dyn Mailer>, MailError> {
        if self.plan.fail_open {
            return Err(MailError::Transport("connection refused".to_string()));
        }
        self.record.lock().opened += 1;
        Ok(Box::new(RecordingMailer {
            plan: self.plan,
            record: Arc::clone(&self.record),
            sent_by_this_mailer: Mutex::new(0),
        }))
    }
}

struct RecordingMailer {
    plan: FailurePlan,
    record: Arc<Mutex<Record>>,
    sent_by_this_mailer: Mutex<usize>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let index = {
            let mut count = self.sent_by_this_mailer.lock();
            *count += 1;
            *count
        };

        let mut record = self.record.lock();
        record.attempts.push(email.clone());

        let fail = if index == 1 {
            self.plan.fail_admin
        } else {
            self.plan.fail_confirmation
        };
        if fail {
            return Err(MailError::Transport(format!("550 mailbox unavailable: {}", email.to)));
        }

        record.delivered.push(email.clone());
        Ok(())
    }
}
