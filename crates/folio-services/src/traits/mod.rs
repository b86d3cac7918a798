// Copyright 2025 Anubhav Chaurasia
// SPDX-License-Identifier: Apache-2.0

//! Service trait definitions

pub mod contact_service;
pub mod mailer;

pub use contact_service::ContactService;
pub use mailer::{MailTransport, Mailer};
