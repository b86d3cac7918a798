// Copyright 2025 Anubhav Chaurasia
// SPDX-License-Identifier: Apache-2.0

/*!
# Folio Service Layer

Transport-agnostic contact relay. Adapters (the axum HTTP API, tests) call
[`ContactService`]; the service validates the submission, renders the two
HTML emails and hands them to a [`Mailer`] obtained from a [`MailTransport`].

```text
┌───────────────────────────────────────────────┐
│  TRANSPORT ADAPTERS  (folio-api / axum)       │
└──────────────────────┬────────────────────────┘
                       ↓
┌───────────────────────────────────────────────┐
│  SERVICE LAYER (this crate)                   │
│  • ContactService   - validate + relay        │
│  • templates        - admin / confirmation    │
└──────────────────────┬────────────────────────┘
                       ↓
┌───────────────────────────────────────────────┐
│  MAIL TRANSPORT  (lettre SMTP, or recording)  │
└───────────────────────────────────────────────┘
```

The admin notification is mandatory: if it fails the relay fails. The
confirmation to the sender is best-effort: its failure is logged and only
changes [`ContactOutcome::confirmation_sent`].

Copyright 2025 Anubhav Chaurasia
Licensed under the Apache License, Version 2.0
*/

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod impls;
pub mod smtp;
pub mod templates;
pub mod traits;
pub mod types;
pub mod validation;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use impls::ContactServiceImpl;
pub use smtp::{SmtpMailer, SmtpTransportFactory};
pub use traits::{ContactService, MailTransport, Mailer};
pub use types::*;
