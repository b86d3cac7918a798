//! Logging options consumed by [`crate::init_logging`]

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Console log format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogFormat {
    Text,
    Json,
}

/// Logging options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingOptions {
    /// Default level for crates without a debug flag
    pub level: String,

    pub format: LogFormat,

    /// Base directory for rolling files; `None` logs to the console only
    pub log_dir: Option<PathBuf>,

    /// Remove run directories older than this many days
    pub retention_days: u64,

    /// Keep at most this many run directories
    pub retention_runs: usize,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        LoggingOptions {
            level: "info".to_string(),
            format: LogFormat::Text,
            log_dir: None,
            retention_days: 30,
            retention_runs: 10,
        }
    }
}
