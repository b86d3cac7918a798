// Copyright 2025 Anubhav Chaurasia
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use folio_relay::prelude::*;

/// Folio Relay - contact form email relay for a portfolio site
#[derive(Parser, Debug)]
#[command(name = "folio-relay", version, author, long_about = None)]
struct Args {
    /// TOML configuration file (default: FOLIO_CONFIG_PATH or folio_configuration.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// `.env` file with SMTP settings (default: FOLIO_ENV_FILE or ./.env)
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Bind address
    #[arg(long)]
    host: Option<String>,

    /// Listen port
    #[arg(short, long)]
    port: Option<u16>,

    /// Default log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Enable debug logging for a crate (repeatable, e.g. --debug folio-api)
    #[arg(long = "debug", value_name = "CRATE")]
    debug_crates: Vec<String>,

    /// Enable debug logging for every folio crate
    #[arg(long, default_value_t = false)]
    debug_all: bool,

    /// Emit console logs as JSON
    #[arg(long, default_value_t = false)]
    log_json: bool,
}

impl Args {
    /// Overrides in the key format understood by `apply_cli_overrides`
    fn config_overrides(&self) -> HashMap<String, String> {
        let mut overrides = HashMap::new();
        if let Some(host) = &self.host {
            overrides.insert("host".to_string(), host.clone());
        }
        if let Some(port) = self.port {
            overrides.insert("port".to_string(), port.to_string());
        }
        if let Some(level) = &self.log_level {
            overrides.insert("log_level".to_string(), level.clone());
        }
        if self.log_json {
            overrides.insert("log_json".to_string(), "true".to_string());
        }
        overrides
    }
}

fn logging_options(config: &RelayConfig) -> LoggingOptions {
    LoggingOptions {
        level: config.logging.level.clone(),
        format: if config.logging.json {
            LogFormat::Json
        } else {
            LogFormat::Text
        },
        log_dir: config.logging.log_dir.clone(),
        retention_days: config.logging.retention_days,
        retention_runs: config.logging.retention_runs,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let overrides = args.config_overrides();
    let config = load_config(args.config.as_deref(), args.env_file.as_deref(), Some(&overrides))
        .context("Failed to load configuration")?;
    validate_config(&config).context("Invalid configuration")?;

    let debug_flags = CrateDebugFlags::from_crate_names(&args.debug_crates, args.debug_all).with_env();
    let _logging_guard = init_logging(&debug_flags, &logging_options(&config))?;

    info!(target: "folio-relay", "🚀 Folio Relay v{} starting", folio_relay::VERSION);

    let service = ContactServiceImpl::new(
        config.smtp.clone(),
        config.branding.clone(),
        Arc::new(SmtpTransportFactory),
    );
    let missing = service.missing_smtp_settings();
    if missing.is_empty() {
        info!(
            target: "folio-relay",
            "SMTP relay via {}:{} as {}",
            config.smtp.host,
            config.smtp.port,
            config.smtp.username
        );
    } else {
        warn!(
            target: "folio-relay",
            "⚠️ SMTP configuration incomplete (missing: {}); submissions will be rejected",
            missing.join(", ")
        );
    }

    let state = ApiState::new(Arc::new(service))
        .with_cors_origins(config.server.cors_allowed_origins.clone());
    let app = create_http_server(state);

    let bind = (config.server.host.as_str(), config.server.port);
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {}:{}", bind.0, bind.1))?;
    let addr = listener.local_addr()?;

    info!(target: "folio-relay", "✅ Listening on http://{}", addr);
    info!(target: "folio-relay", "   POST http://{}/api/send-email", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!(target: "folio-relay", "Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(target: "folio-relay", "Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!(target: "folio-relay", "Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides() {
        let args = Args::try_parse_from([
            "folio-relay",
            "--port",
            "8080",
            "--host",
            "127.0.0.1",
            "--log-json",
            "--debug",
            "folio-api",
            "--debug",
            "folio-services",
        ])
        .unwrap();

        let overrides = args.config_overrides();
        assert_eq!(overrides.get("port").map(String::as_str), Some("8080"));
        assert_eq!(overrides.get("host").map(String::as_str), Some("127.0.0.1"));
        assert_eq!(overrides.get("log_json").map(String::as_str), Some("true"));
        assert!(!overrides.contains_key("log_level"));
        assert_eq!(args.debug_crates, vec!["folio-api", "folio-services"]);
    }

    #[test]
    fn test_no_flags_no_overrides() {
        let args = Args::try_parse_from(["folio-relay"]).unwrap();
        assert!(args.config_overrides().is_empty());
        assert!(!args.debug_all);
    }

    #[test]
    fn test_logging_options_follow_config() {
        let mut config = RelayConfig::default();
        config.logging.json = true;
        config.logging.level = "debug".to_string();

        let options = logging_options(&config);
        assert_eq!(options.format, LogFormat::Json);
        assert_eq!(options.level, "debug");
    }
}
