// Copyright 2025 Anubhav Chaurasia
// SPDX-License-Identifier: Apache-2.0

//! Logging initialization
//!
//! Console output is always installed. With the `file-logging` feature and a
//! configured `log_dir`, a JSON file layer is added under a timestamped run
//! folder:
//! ```text
//! ./logs/
//!   └── run_20250101_120000/
//!       └── folio-relay.log
//! ```

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::cli::CrateDebugFlags;
use crate::config::{LogFormat, LoggingOptions};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Keeps background log writers alive; flushes on drop
pub struct LoggingGuard {
    #[cfg(feature = "file-logging")]
    _file_guards: Vec<tracing_appender::non_blocking::WorkerGuard>,
    log_dir: Option<PathBuf>,
}

impl LoggingGuard {
    /// Run folder that receives log files, if file logging is active
    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }
}

/// Build the `EnvFilter` for the given flags and default level
///
/// `RUST_LOG`, when set, replaces the computed directives.
pub fn build_env_filter(debug_flags: &CrateDebugFlags, default_level: &str) -> Result<EnvFilter> {
    if let Ok(directives) = std::env::var("RUST_LOG") {
        if !directives.trim().is_empty() {
            return EnvFilter::try_new(directives).map_err(|e| anyhow!("Invalid RUST_LOG: {}", e));
        }
    }
    let filter = debug_flags.to_filter_string(&default_level.to_lowercase());
    EnvFilter::try_new(&filter).map_err(|e| anyhow!("Invalid log filter '{}': {}", filter, e))
}

/// Initialize the global subscriber
///
/// # Errors
/// Fails on an invalid filter, an unwritable log directory, or when a global
/// subscriber is already installed.
pub fn init_logging(debug_flags: &CrateDebugFlags, options: &LoggingOptions) -> Result<LoggingGuard> {
    let mut layers: Vec<BoxedLayer> = Vec::new();

    let console_filter = build_env_filter(debug_flags, &options.level)?;
    let console_layer = match options.format {
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
            .with_filter(console_filter)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_filter(console_filter)
            .boxed(),
    };
    layers.push(console_layer);

    #[cfg(feature = "file-logging")]
    let (file_guards, log_dir) = match &options.log_dir {
        Some(base) => {
            let (layer, guard, run_folder) = file_layer(base, debug_flags, options)?;
            layers.push(layer);
            (vec![guard], Some(run_folder))
        }
        None => (Vec::new(), None),
    };

    #[cfg(not(feature = "file-logging"))]
    let log_dir = {
        if options.log_dir.is_some() {
            eprintln!("Warning: log_dir is set but folio-observability was built without `file-logging`");
        }
        None
    };

    Registry::default()
        .with(layers)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(LoggingGuard {
        #[cfg(feature = "file-logging")]
        _file_guards: file_guards,
        log_dir,
    })
}

#[cfg(feature = "file-logging")]
fn file_layer(
    base_log_dir: &Path,
    debug_flags: &CrateDebugFlags,
    options: &LoggingOptions,
) -> Result<(BoxedLayer, tracing_appender::non_blocking::WorkerGuard, PathBuf)> {
    use anyhow::Context;
    use chrono::Utc;

    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    let run_folder = base_log_dir.join(format!("run_{}", timestamp));
    std::fs::create_dir_all(&run_folder)
        .with_context(|| format!("Failed to create log directory: {}", run_folder.display()))?;

    cleanup_old_logs(base_log_dir, options.retention_days, options.retention_runs)?;

    let appender = tracing_appender::rolling::daily(&run_folder, "folio-relay.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .with_filter(build_env_filter(debug_flags, &options.level)?)
        .boxed();

    Ok((layer, guard, run_folder))
}

/// Remove run folders older than `retention_days`, then trim to the newest
/// `retention_runs`
///
/// The newest run folder is never removed, whatever the limits.
#[cfg(feature = "file-logging")]
pub fn cleanup_old_logs(base_log_dir: &Path, retention_days: u64, retention_runs: usize) -> Result<()> {
    use chrono::{NaiveDateTime, Utc};

    if !base_log_dir.exists() {
        return Ok(());
    }

    let cutoff = Utc::now().naive_utc() - chrono::Duration::days(retention_days as i64);

    let mut runs: Vec<(PathBuf, NaiveDateTime)> = std::fs::read_dir(base_log_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_dir())
        .filter_map(|path| {
            let stamp = path.file_name()?.to_str()?.strip_prefix("run_")?.to_string();
            let parsed = NaiveDateTime::parse_from_str(&stamp, "%Y%m%d_%H%M%S").ok()?;
            Some((path, parsed))
        })
        .collect();

    // Oldest first; the newest run is the one being written and always stays
    runs.sort_by_key(|(_, stamp)| *stamp);
    runs.pop();

    let (expired, kept): (Vec<_>, Vec<_>) = runs.into_iter().partition(|(_, stamp)| *stamp < cutoff);
    let overflow = kept.len().saturating_sub(retention_runs.saturating_sub(1));

    for (path, _) in expired.iter().chain(kept.iter().take(overflow)) {
        if let Err(e) = std::fs::remove_dir_all(path) {
            eprintln!("Warning: Failed to remove old log directory {}: {}", path.display(), e);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_env_filter_accepts_flags() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let flags = CrateDebugFlags::from_crate_names(["folio-api"], false);
        assert!(build_env_filter(&flags, "INFO").is_ok());
    }

    #[cfg(feature = "file-logging")]
    #[test]
    fn test_cleanup_keeps_newest_runs() {
        let dir = tempfile::tempdir().unwrap();
        let now = chrono::Utc::now();
        let mut names = Vec::new();
        for minutes in 0..4 {
            let stamp = (now - chrono::Duration::minutes(minutes)).format("%Y%m%d_%H%M%S");
            let name = format!("run_{}", stamp);
            std::fs::create_dir_all(dir.path().join(&name)).unwrap();
            names.push(name);
        }
        std::fs::create_dir_all(dir.path().join("run_20000101_000000")).unwrap();
        std::fs::create_dir_all(dir.path().join("not_a_run")).unwrap();

        cleanup_old_logs(dir.path(), 30, 2).unwrap();

        assert!(!dir.path().join("run_20000101_000000").exists());
        assert!(dir.path().join(&names[0]).exists());
        assert!(dir.path().join(&names[1]).exists());
        assert!(!dir.path().join(&names[3]).exists());
        assert!(dir.path().join("not_a_run").exists());
    }

    #[cfg(feature = "file-logging")]
    #[test]
    fn test_cleanup_never_removes_current_run() {
        let dir = tempfile::tempdir().unwrap();
        let now = chrono::Utc::now();
        let current = format!("run_{}", now.format("%Y%m%d_%H%M%S"));
        let previous = format!(
            "run_{}",
            (now - chrono::Duration::minutes(5)).format("%Y%m%d_%H%M%S")
        );
        std::fs::create_dir_all(dir.path().join(&current)).unwrap();
        std::fs::create_dir_all(dir.path().join(&previous)).unwrap();

        cleanup_old_logs(dir.path(), 0, 0).unwrap();

        assert!(dir.path().join(&current).exists());
        assert!(!dir.path().join(&previous).exists());
    }
}
