// Copyright 2025 Anubhav Chaurasia
// SPDX-License-Identifier: Apache-2.0

//! # Folio Configuration System
//!
//! Type-safe configuration loader for the contact relay with support for:
//! - TOML file parsing (optional `folio_configuration.toml`)
//! - `.env` file values (`SMTP_*` and `FOLIO_*` keys)
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! ## Usage
//!
//! ```rust,no_run
//! use folio_config::{load_config, RelayConfig};
//!
//! let config: RelayConfig = load_config(None, None, None).expect("Failed to load config");
//!
//! println!("Listening on {}:{}", config.server.host, config.server.port);
//! println!("SMTP relay: {}:{}", config.smtp.host, config.smtp.port);
//! ```
//!
//! SMTP credentials are deliberately allowed to be missing at load time. The
//! relay reports incomplete SMTP settings per request instead of refusing to
//! start.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod env_file;
pub mod loader;
pub mod types;
pub mod validation;

pub use env_file::{parse_env_file, read_env_file};
pub use loader::{
    apply_cli_overrides, apply_environment_overrides, collect_environment, find_config_file,
    load_config,
};
pub use types::*;
pub use validation::{validate_config, ConfigValidationError};

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax: {0}")]
    ParseError(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
