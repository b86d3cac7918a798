// Copyright 2025 Anubhav Chaurasia
// SPDX-License-Identifier: Apache-2.0

//! `.env` file reader
//!
//! Lines are `KEY=VALUE`, optionally prefixed with `export`. Blank lines
//! and lines starting with `#` are skipped, keys and values are trimmed,
//! and a value wrapped in matching single or double quotes is unwrapped. Values are returned as a map and
//! never written into the process environment.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::ConfigResult;

/// Parse the contents of a `.env` file
pub fn parse_env_file(content: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((key, value)) = trimmed.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let key = key.strip_prefix("export ").map(str::trim).unwrap_or(key);
        if key.is_empty() {
            continue;
        }

        values.insert(key.to_string(), unquote(value.trim()).to_string());
    }

    values
}

/// Read a `.env` file. A missing file yields an empty map.
pub fn read_env_file(path: &Path) -> ConfigResult<HashMap<String, String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(parse_env_file(&content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
        Err(e) => Err(e.into()),
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
