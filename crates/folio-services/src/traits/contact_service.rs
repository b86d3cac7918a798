/*!
Contact relay service trait.

Defines the stable interface adapters use to relay a contact submission.

Copyright 2025 Anubhav Chaurasia
Licensed under the Apache License, Version 2.0
*/

use crate::types::*;
use async_trait::async_trait;

/// Contact relay service (transport-agnostic)
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Validate a submission and deliver it by email
    ///
    /// Sends the admin notification, then attempts the confirmation to the
    /// submitter. Each call is independent: identical submissions are sent
    /// again.
    ///
    /// # Errors
    /// * `ServiceError::MissingField` - a field is absent or blank
    /// * `ServiceError::InvalidEmail` - email fails the address pattern
    /// * `ServiceError::Configuration` - SMTP settings incomplete
    /// * `ServiceError::Delivery` - admin notification not delivered
    ///
    async fn relay(&self, request: ContactRequest) -> ServiceResult<ContactOutcome>;

    /// Whether the SMTP settings are complete enough to attempt delivery
    fn smtp_configured(&self) -> bool;
}
