//! Tool settings for the history view
//!
//! Settings cover the *tool*, not the history contents — the entry
//! list itself is never persisted. Missing files and missing fields
//! fall back to defaults, so a host can ship without any settings file
//! at all.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::history::DEFAULT_CAPACITY;
use crate::history::filter::{DEFAULT_IGNORED_EXTENSIONS, ExtensionFilter};

// Default value functions for serde
fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}
fn default_ignored_extensions() -> Vec<String> {
    DEFAULT_IGNORED_EXTENSIONS
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// History tool settings, loaded from a TOML file.
///
/// ```toml
/// capacity = 32
/// ignored_extensions = ["", ".afdesign", ".meta"]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct HistorySettings {
    /// Maximum number of entries the history retains
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Extensions excluded from tracking (`""` matches extensionless
    /// paths, most often folders)
    #[serde(default = "default_ignored_extensions")]
    pub ignored_extensions: Vec<String>,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            ignored_extensions: default_ignored_extensions(),
        }
    }
}

impl HistorySettings {
    /// Load settings from a TOML file, or return defaults when the
    /// file does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or
    /// parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("no settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse settings from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Build the ignore filter described by these settings.
    #[must_use]
    pub fn filter(&self) -> ExtensionFilter {
        ExtensionFilter::new(&self.ignored_extensions)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let settings = HistorySettings::default();
        assert_eq!(settings.capacity, 32);
        assert_eq!(settings.ignored_extensions, ["", ".afdesign"]);
    }

    #[test]
    fn test_parse_full() {
        let settings = HistorySettings::parse(
            r#"
            capacity = 8
            ignored_extensions = [".meta", ".tmp"]
            "#,
        )
        .unwrap();

        assert_eq!(settings.capacity, 8);
        assert_eq!(settings.ignored_extensions, [".meta", ".tmp"]);
    }

    #[test]
    fn test_parse_partial_falls_back_per_field() {
        let settings = HistorySettings::parse("capacity = 16").unwrap();
        assert_eq!(settings.capacity, 16);
        assert_eq!(settings.ignored_extensions, ["", ".afdesign"]);
    }

    #[test]
    fn test_parse_rejects_malformed_toml() {
        assert!(HistorySettings::parse("capacity = ").is_err());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let settings = HistorySettings::load("does/not/exist.toml").unwrap();
        assert_eq!(settings.capacity, 32);
    }
}
