// Copyright 2025 Anubhav Chaurasia
// SPDX-License-Identifier: Apache-2.0

//! Configuration loading with override support
//!
//! Sources are applied in order, later ones winning:
//! 1. Built-in defaults
//! 2. TOML file (optional)
//! 3. `.env` file (optional)
//! 4. Process environment variables
//! 5. CLI arguments

use crate::env_file::read_env_file;
use crate::{ConfigError, ConfigResult, RelayConfig};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "folio_configuration.toml";

/// Find the relay configuration file
///
/// Search order:
/// 1. `FOLIO_CONFIG_PATH` environment variable
/// 2. Current working directory: `./folio_configuration.toml`
/// 3. Up to 5 parent directories
///
/// Returns `Ok(None)` when no file exists; the relay then runs on defaults
/// and environment values.
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` only if `FOLIO_CONFIG_PATH` names a
/// file that does not exist.
pub fn find_config_file() -> ConfigResult<Option<PathBuf>> {
    if let Ok(env_path) = env::var("FOLIO_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(Some(path));
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by FOLIO_CONFIG_PATH not found: {}",
            path.display()
        )));
    }

    let Ok(cwd) = env::current_dir() else {
        return Ok(None);
    };

    Ok(cwd
        .ancestors()
        .take(6)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.exists()))
}

/// Gather environment values: the `.env` file first, then the process
/// environment on top of it
///
/// `env_file` defaults to `FOLIO_ENV_FILE` or `./.env`. A missing file is
/// not an error.
pub fn collect_environment(env_file: Option<&Path>) -> ConfigResult<HashMap<String, String>> {
    let env_path = match env_file {
        Some(path) => path.to_path_buf(),
        None => env::var("FOLIO_ENV_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".env")),
    };

    let mut values = read_env_file(&env_path)?;
    values.extend(env::vars());
    Ok(values)
}

/// Load configuration from all sources
///
/// # Arguments
///
/// * `config_path` - Optional TOML file. If `None`, [`find_config_file`] is used.
/// * `env_file` - Optional `.env` file. If `None`, see [`collect_environment`].
/// * `cli_args` - Optional CLI overrides
///
/// # Errors
///
/// Returns an error if a named file is missing, a file is unreadable, or the
/// TOML is invalid.
pub fn load_config(
    config_path: Option<&Path>,
    env_file: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<RelayConfig> {
    let config_file = match config_path {
        Some(path) if !path.exists() => {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file()?,
    };

    let mut config = match config_file {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            toml::from_str(&content)?
        }
        None => RelayConfig::default(),
    };

    let environment = collect_environment(env_file)?;
    apply_environment_overrides(&mut config, &environment);

    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    Ok(config)
}

/// Apply environment variable overrides to configuration
///
/// Supported variables:
/// - `SMTP_HOST` -> `smtp.host`
/// - `SMTP_PORT` -> `smtp.port` (ignored unless a valid port)
/// - `SMTP_USERNAME` -> `smtp.username`
/// - `SMTP_PASSWORD` -> `smtp.password`
/// - `SMTP_FROM` -> `smtp.from_address`
/// - `SMTP_FROM_NAME` -> `smtp.from_name`
/// - `SMTP_TO` -> `smtp.recipient`
/// - `FOLIO_HOST` -> `server.host`
/// - `FOLIO_PORT` -> `server.port`
/// - `FOLIO_LOG_LEVEL` -> `logging.level`
///
/// Empty values leave the current setting untouched, so an empty
/// `SMTP_HOST=` still resolves to the default host.
pub fn apply_environment_overrides(config: &mut RelayConfig, env: &HashMap<String, String>) {
    let get = |key: &str| env.get(key).filter(|value| !value.trim().is_empty()).cloned();

    // SMTP settings
    if let Some(value) = get("SMTP_HOST") {
        config.smtp.host = value;
    }
    if let Some(port) = get("SMTP_PORT").and_then(|v| v.trim().parse::<u16>().ok()) {
        config.smtp.port = port;
    }
    if let Some(value) = get("SMTP_USERNAME") {
        config.smtp.username = value;
    }
    if let Some(value) = get("SMTP_PASSWORD") {
        config.smtp.password = value;
    }
    if let Some(value) = get("SMTP_FROM") {
        config.smtp.from_address = value;
    }
    if let Some(value) = get("SMTP_FROM_NAME") {
        config.smtp.from_name = value;
    }
    if let Some(value) = get("SMTP_TO") {
        config.smtp.recipient = value;
    }

    // Server settings
    if let Some(value) = get("FOLIO_HOST") {
        config.server.host = value;
    }
    if let Some(port) = get("FOLIO_PORT").and_then(|v| v.trim().parse::<u16>().ok()) {
        config.server.port = port;
    }
    if let Some(value) = get("FOLIO_LOG_LEVEL") {
        config.logging.level = value;
    }
}

/// Apply CLI argument overrides to configuration
///
/// Recognised keys: `host`, `port`, `log_level`, `log_json`.
pub fn apply_cli_overrides(config: &mut RelayConfig, cli_args: &HashMap<String, String>) {
    if let Some(value) = cli_args.get("host") {
        config.server.host = value.clone();
    }
    if let Some(port) = cli_args.get("port").and_then(|v| v.parse::<u16>().ok()) {
        config.server.port = port;
    }
    if let Some(value) = cli_args.get("log_level") {
        config.logging.level = value.clone();
    }
    if let Some(value) = cli_args.get("log_json") {
        config.logging.json = value.to_lowercase() == "true" || value == "1";
    }
}
