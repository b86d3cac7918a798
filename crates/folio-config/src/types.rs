// Copyright 2025 Anubhav Chaurasia
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! This module defines all configuration structs that map to sections in
//! `folio_configuration.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RelayConfig {
    pub server: ServerConfig,
    pub smtp: SmtpConfig,
    pub branding: BrandingConfig,
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_allowed_origins: Vec::new(),
        }
    }
}

/// SMTP submission settings
///
/// Empty strings mean "not configured". `SMTP_TO` falls back to the username
/// when unset.
#[derive(Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Envelope/header sender address (`SMTP_FROM`)
    pub from_address: String,
    /// Display name shown next to the sender address (`SMTP_FROM_NAME`)
    pub from_name: String,
    /// Admin mailbox receiving submissions (`SMTP_TO`)
    pub recipient: String,
    /// Connection timeout handed to the SMTP transport
    pub timeout_secs: u64,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: "smtp.gmail.com".to_string(),
            port: 587,
            username: String::new(),
            password: String::new(),
            from_address: String::new(),
            from_name: "Portfolio Contact Form".to_string(),
            recipient: String::new(),
            timeout_secs: 30,
        }
    }
}

impl SmtpConfig {
    /// Resolve the admin recipient, falling back to the SMTP username
    pub fn recipient(&self) -> Option<&str> {
        [self.recipient.as_str(), self.username.as_str()]
            .into_iter()
            .find(|value| !value.trim().is_empty())
    }

    /// Whether every setting needed to send mail is present
    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty()
            && !self.password.is_empty()
            && !self.from_address.trim().is_empty()
            && self.recipient().is_some()
    }
}

// Hand-written so the password never ends up in logs.
impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &if self.password.is_empty() { "" } else { "***" })
            .field("from_address", &self.from_address)
            .field("from_name", &self.from_name)
            .field("recipient", &self.recipient)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// A link rendered at the bottom of the confirmation email
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Content used by the email templates
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BrandingConfig {
    pub owner_name: String,
    pub owner_title: String,
    /// Expected reply window quoted in the confirmation email
    pub response_window: String,
    pub social_links: Vec<SocialLink>,
    /// Offset from UTC (minutes) used for the admin email timestamp
    pub utc_offset_minutes: i32,
    pub timezone_label: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            owner_name: "Anubhav Chaurasia".to_string(),
            owner_title: "Backend Developer".to_string(),
            response_window: "24-48 Hours".to_string(),
            social_links: vec![
                SocialLink {
                    label: "LinkedIn".to_string(),
                    url: "https://linkedin.com/in/anubhav16o8".to_string(),
                },
                SocialLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com/i8o8i-Developer".to_string(),
                },
            ],
            utc_offset_minutes: 330,
            timezone_label: "IST".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter level (trace, debug, info, warn, error)
    pub level: String,
    /// Emit JSON lines on the console instead of text
    pub json: bool,
    /// Base directory for rolling log files (requires the `file-logging` feature)
    pub log_dir: Option<PathBuf>,
    pub retention_days: u64,
    pub retention_runs: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            log_dir: None,
            retention_days: 30,
            retention_runs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipient_falls_back_to_username() {
        let mut smtp = SmtpConfig {
            username: "owner@example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(smtp.recipient(), Some("owner@example.com"));

        smtp.recipient = "inbox@example.com".to_string();
        assert_eq!(smtp.recipient(), Some("inbox@example.com"));

        smtp.username.clear();
        smtp.recipient = "   ".to_string();
        assert_eq!(smtp.recipient(), None);
    }

    #[test]
    fn test_is_complete_requires_credentials_and_sender() {
        let mut smtp = SmtpConfig {
            username: "owner@example.com".to_string(),
            password: "secret".to_string(),
            ..Default::default()
        };
        assert!(!smtp.is_complete());

        smtp.from_address = "owner@example.com".to_string();
        assert!(smtp.is_complete());

        smtp.password.clear();
        assert!(!smtp.is_complete());
    }

    #[test]
    fn test_debug_masks_password() {
        let smtp = SmtpConfig {
            password: "hunter2".to_string(),
            ..Default::default()
        };
        let rendered = format!("{:?}", smtp);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: RelayConfig = toml::from_str(
            r#"
            [smtp]
            username = "owner@example.com"

            [branding]
            owner_name = "Jane Owner"
            "#,
        )
        .unwrap();

        assert_eq!(config.smtp.username, "owner@example.com");
        assert_eq!(config.smtp.port, 587);
        assert_eq!(config.branding.owner_name, "Jane Owner");
        assert_eq!(config.branding.response_window, "24-48 Hours");
        assert_eq!(config.server.port, 3000);
    }
}
