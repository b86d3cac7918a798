// Copyright 2025 Anubhav Chaurasia
// SPDX-License-Identifier: Apache-2.0

//! # folio-observability
//!
//! Logging setup shared by the relay binary and its crates.
//!
//! Every crate logs through `tracing` with an explicit `target:` equal to its
//! crate name, which is what the per-crate debug flags filter on.
//!
//! ## Features
//! - `file-logging`: daily-rolling JSON log files with retention cleanup

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod config;
pub mod init;

pub use cli::*;
pub use config::*;
pub use init::*;

/// Known crate names (log targets) for debug flags
pub const KNOWN_CRATES: &[&str] = &[
    "folio-relay",
    "folio-api",
    "folio-services",
    "folio-config",
    "folio-observability",
];
