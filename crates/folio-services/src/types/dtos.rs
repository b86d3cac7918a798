// Copyright 2025 Anubhav Chaurasia
// SPDX-License-Identifier: Apache-2.0

/*!
Data Transfer Objects for the service layer.

Copyright 2025 Anubhav Chaurasia
Licensed under the Apache License, Version 2.0
*/

use serde::{Deserialize, Serialize};

/// Raw contact form input, as received from a transport
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
        }
    }
}

/// A validated, trimmed submission
///
/// Only constructed through [`crate::validation::validate_submission`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) message: String,
}

impl ContactSubmission {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result of a successful relay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactOutcome {
    /// Whether the best-effort confirmation reached the sender's server
    pub confirmation_sent: bool,
}

impl ContactOutcome {
    /// Message returned to the submitter
    pub fn message(&self) -> &'static str {
        if self.confirmation_sent {
            "Email Sent Successfully - Confirmation Sent"
        } else {
            "Email Sent Successfully"
        }
    }
}

/// Sender mailbox: display name plus address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub display_name: String,
    pub address: String,
}

/// One HTML email ready for dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: Sender,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
}
