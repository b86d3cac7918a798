//! Per-crate debug flags
//!
//! Flags come from the binary's `--debug <crate>` / `--debug-all` options and
//! from the `FOLIO_DEBUG` environment variable.

use std::collections::BTreeSet;
use std::env;

use crate::KNOWN_CRATES;

/// Set of crates with debug logging enabled
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrateDebugFlags {
    pub enabled_crates: BTreeSet<String>,
}

impl CrateDebugFlags {
    /// Build flags from explicit crate names
    ///
    /// `debug_all` enables every entry of [`KNOWN_CRATES`].
    pub fn from_crate_names<I, S>(names: I, debug_all: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut flags = CrateDebugFlags::default();
        for name in names {
            flags.enable(name.as_ref());
        }
        if debug_all {
            flags.enable_all();
        }
        flags
    }

    /// Merge in the `FOLIO_DEBUG` value (`all` or comma-separated crate names)
    pub fn merge_env_value(&mut self, value: &str) {
        if value.trim() == "all" {
            self.enable_all();
            return;
        }
        for crate_name in value.split(',') {
            self.enable(crate_name);
        }
    }

    /// Merge in `FOLIO_DEBUG` from the process environment, if set
    pub fn with_env(mut self) -> Self {
        if let Ok(value) = env::var("FOLIO_DEBUG") {
            self.merge_env_value(&value);
        }
        self
    }

    fn enable(&mut self, crate_name: &str) {
        let crate_name = crate_name.trim();
        if !crate_name.is_empty() {
            self.enabled_crates.insert(crate_name.to_string());
        }
    }

    fn enable_all(&mut self) {
        for crate_name in KNOWN_CRATES {
            self.enabled_crates.insert(crate_name.to_string());
        }
    }

    /// Check if debug is enabled for a specific crate
    pub fn is_enabled(&self, crate_name: &str) -> bool {
        self.enabled_crates.contains(crate_name)
    }

    /// Check if debug is enabled for any crate
    pub fn any_enabled(&self) -> bool {
        !self.enabled_crates.is_empty()
    }

    /// Build an `EnvFilter` directive string
    ///
    /// Format: `folio-api=debug,folio-services=debug,info`, where the trailing
    /// entry is `default_level`.
    pub fn to_filter_string(&self, default_level: &str) -> String {
        let mut filters: Vec<String> = self
            .enabled_crates
            .iter()
            .map(|crate_name| format!("{}=debug", crate_name))
            .collect();
        filters.push(default_level.to_string());
        filters.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_crate_flag() {
        let flags = CrateDebugFlags::from_crate_names(["folio-api"], false);
        assert!(flags.is_enabled("folio-api"));
        assert!(!flags.is_enabled("folio-services"));
    }

    #[test]
    fn test_debug_all() {
        let flags = CrateDebugFlags::from_crate_names(Vec::<String>::new(), true);
        for crate_name in KNOWN_CRATES {
            assert!(flags.is_enabled(crate_name), "{} should be enabled", crate_name);
        }
    }

    #[test]
    fn test_env_value_parsing() {
        let mut flags = CrateDebugFlags::default();
        flags.merge_env_value(" folio-api , ,folio-services");
        assert_eq!(flags.enabled_crates.len(), 2);
        assert!(flags.is_enabled("folio-services"));

        let mut flags = CrateDebugFlags::default();
        flags.merge_env_value("all");
        assert_eq!(flags.enabled_crates.len(), KNOWN_CRATES.len());
    }

    #[test]
    fn test_filter_string() {
        let flags = CrateDebugFlags::from_crate_names(["folio-services", "folio-api"], false);
        assert_eq!(
            flags.to_filter_string("warn"),
            "folio-api=debug,folio-services=debug,warn"
        );
        assert_eq!(CrateDebugFlags::default().to_filter_string("info"), "info");
    }
}
