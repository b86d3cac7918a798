//! # Folio Relay
//!
//! Contact form email relay for a personal portfolio site. A submission
//! posted to `/api/send-email` is validated, forwarded to the site owner as an
//! HTML email and acknowledged to the sender with a best-effort confirmation.
//!
//! This crate re-exports the workspace members so embedders can depend on a
//! single crate:
//!
//! - [`config`]: typed settings from TOML, `.env`, environment and CLI
//! - [`observability`]: logging initialisation and per-crate debug flags
//! - [`services`]: validation, email templates and SMTP dispatch
//! - [`api`]: the axum router
//!
//! ## Embedding the router
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use folio_relay::api::{create_http_server, ApiState};
//! use folio_relay::config::RelayConfig;
//! use folio_relay::services::{ContactServiceImpl, SmtpTransportFactory};
//!
//! let config = RelayConfig::default();
//! let service = ContactServiceImpl::new(
//!     config.smtp.clone(),
//!     config.branding.clone(),
//!     Arc::new(SmtpTransportFactory),
//! );
//! let router = create_http_server(ApiState::new(Arc::new(service)));
//! # let _ = router;
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use folio_api as api;
pub use folio_config as config;
pub use folio_observability as observability;
pub use folio_services as services;

/// Common imports for binaries and embedders
pub mod prelude {
    pub use folio_api::{create_http_server, ApiState};
    pub use folio_config::{load_config, validate_config, RelayConfig};
    pub use folio_observability::{init_logging, CrateDebugFlags, LogFormat, LoggingOptions};
    pub use folio_services::{ContactService, ContactServiceImpl, SmtpTransportFactory};
}
