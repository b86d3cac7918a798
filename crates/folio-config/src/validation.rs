//! Configuration validation
//!
//! Checks that loaded values are usable for starting the server. Missing
//! SMTP credentials are not a startup failure; the relay reports them per
//! request.

use crate::{ConfigError, ConfigResult, RelayConfig};

/// Validation errors that can occur during config validation
#[derive(Debug, Clone)]
pub enum ConfigValidationError {
    InvalidPort { port_name: String, port: u16 },
    MissingRequired { field: String },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPort { port_name, port } => {
                write!(f, "Port {} = {} is not a usable port", port_name, port)
            }
            Self::MissingRequired { field } => {
                write!(f, "Missing required configuration: {}", field)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every problem found
pub fn validate_config(config: &RelayConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();

    validate_ports(config, &mut errors);
    validate_required_fields(config, &mut errors);
    validate_value_ranges(config, &mut errors);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

fn validate_ports(config: &RelayConfig, errors: &mut Vec<ConfigValidationError>) {
    if config.server.port == 0 {
        errors.push(ConfigValidationError::InvalidPort {
            port_name: "server.port".to_string(),
            port: config.server.port,
        });
    }
    if config.smtp.port == 0 {
        errors.push(ConfigValidationError::InvalidPort {
            port_name: "smtp.port".to_string(),
            port: config.smtp.port,
        });
    }
}

fn validate_required_fields(config: &RelayConfig, errors: &mut Vec<ConfigValidationError>) {
    if config.server.host.trim().is_empty() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "server.host".to_string(),
        });
    }
    if config.smtp.host.trim().is_empty() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "smtp.host".to_string(),
        });
    }
}

fn validate_value_ranges(config: &RelayConfig, errors: &mut Vec<ConfigValidationError>) {
    // chrono::FixedOffset accepts strictly less than one day
    if config.branding.utc_offset_minutes.abs() >= 24 * 60 {
        errors.push(ConfigValidationError::InvalidValue {
            field: "branding.utc_offset_minutes".to_string(),
            reason: "must be within +/- 1439 minutes".to_string(),
        });
    }

    if config.smtp.timeout_secs == 0 {
        errors.push(ConfigValidationError::InvalidValue {
            field: "smtp.timeout_secs".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    if config.logging.retention_runs == 0 {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.retention_runs".to_string(),
            reason: "must keep at least the current run".to_string(),
        });
    }

    for link in &config.branding.social_links {
        if !(link.url.starts_with("https://") || link.url.starts_with("http://")) {
            errors.push(ConfigValidationError::InvalidValue {
                field: format!("branding.social_links[{}]", link.label),
                reason: "url must start with http:// or https://".to_string(),
            });
        }
    }
}
