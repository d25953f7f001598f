//! Cleaner configuration and its persisted settings store.
//!
//! `CleanerConfig` is an immutable value handed to [`crate::cleaner::clean`].
//! Persistence lives in [`ConfigStore`], which reads and writes
//! `<config_dir>/pastex/config.json`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

const APP_CONFIG_DIR_NAME: &str = "pastex";
const CONFIG_FILE_NAME: &str = "config.json";

/// Setting key for hyphen merging, as stored on disk and accepted by `set`.
pub const KEY_MERGE_HYPHENATED_WORDS: &str = "mergeHyphenatedWords";

/// Options for the text cleaner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanerConfig {
    /// Rejoin words hyphenated across a line wrap.
    /// Default: true
    #[serde(default = "default_true")]
    pub merge_hyphenated_words: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            merge_hyphenated_words: true,
        }
    }
}

impl CleanerConfig {
    /// Creates a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether hyphenated line-wrap words are merged.
    pub fn with_merge_hyphenated_words(mut self, merge: bool) -> Self {
        self.merge_hyphenated_words = merge;
        self
    }

    /// Keeps wrap hyphens in place.
    pub fn without_hyphen_merging(mut self) -> Self {
        self.merge_hyphenated_words = false;
        self
    }

    /// Updates a single setting by its stored key.
    ///
    /// Accepts `true`/`false`, `yes`/`no`, `on`/`off` and `1`/`0`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            KEY_MERGE_HYPHENATED_WORDS | "merge-hyphenated-words" => {
                self.merge_hyphenated_words = parse_bool(value)?;
                Ok(())
            }
            _ => Err(Error::InvalidInput(format!("unknown setting: {key}"))),
        }
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(Error::InvalidInput(format!("not a boolean: {other}"))),
    }
}

/// JSON-backed settings store.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store at the platform default location.
    pub fn platform_default() -> Result<Self> {
        let path = dirs::config_dir()
            .ok_or(Error::NoConfigDir)?
            .join(APP_CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME);
        Ok(Self { path })
    }

    /// Store at an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the config, returning defaults when the file does not exist.
    pub fn load(&self) -> Result<CleanerConfig> {
        if !self.path.exists() {
            debug!(path = ?self.path, "Config file does not exist, using defaults");
            return Ok(CleanerConfig::default());
        }

        let data = fs::read_to_string(&self.path)?;
        let config = serde_json::from_str(&data)?;
        debug!(path = ?self.path, "Config loaded");
        Ok(config)
    }

    /// Loads the config, falling back to defaults on any error.
    pub fn load_or_default(&self) -> CleanerConfig {
        match self.load() {
            Ok(config) => config,
            Err(err) => {
                warn!(error = %err, path = ?self.path, "Failed to load config, using defaults");
                CleanerConfig::default()
            }
        }
    }

    /// Writes the config, creating parent directories as needed.
    pub fn save(&self, config: &CleanerConfig) -> Result<()> {
        ensure_parent_dir_exists(&self.path)?;
        let data = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, data)?;
        debug!(path = ?self.path, "Config saved");
        Ok(())
    }
}

fn ensure_parent_dir_exists(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_merges_hyphens() {
        let config = CleanerConfig::default();
        assert!(config.merge_hyphenated_words);
        assert_eq!(config, CleanerConfig::new());
    }

    #[test]
    fn test_builder_methods() {
        let off = CleanerConfig::new().without_hyphen_merging();
        assert!(!off.merge_hyphenated_words);

        let on = off.with_merge_hyphenated_words(true);
        assert!(on.merge_hyphenated_words);
    }

    #[test]
    fn test_serde_uses_stored_key() {
        let json = serde_json::to_string(&CleanerConfig::default()).unwrap();
        assert_eq!(json, r#"{"mergeHyphenatedWords":true}"#);

        let config: CleanerConfig =
            serde_json::from_str(r#"{"mergeHyphenatedWords":false}"#).unwrap();
        assert!(!config.merge_hyphenated_words);
    }

    #[test]
    fn test_missing_key_defaults_to_true() {
        let config: CleanerConfig = serde_json::from_str("{}").unwrap();
        assert!(config.merge_hyphenated_words);
    }

    #[test]
    fn test_set_by_key() {
        let mut config = CleanerConfig::default();
        config.set(KEY_MERGE_HYPHENATED_WORDS, "off").unwrap();
        assert!(!config.merge_hyphenated_words);

        config.set("merge-hyphenated-words", "YES").unwrap();
        assert!(config.merge_hyphenated_words);
    }

    #[test]
    fn test_set_rejects_unknown_key_and_value() {
        let mut config = CleanerConfig::default();
        assert!(matches!(
            config.set("fontSize", "12"),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            config.set(KEY_MERGE_HYPHENATED_WORDS, "maybe"),
            Err(Error::InvalidInput(_))
        ));
        // Failed updates leave the value untouched
        assert!(config.merge_hyphenated_words);
    }

    #[test]
    fn test_store_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join("config.json"));
        assert_eq!(store.load().unwrap(), CleanerConfig::default());
    }

    #[test]
    fn test_store_round_trip_creates_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join("nested").join("config.json"));

        let config = CleanerConfig::new().without_hyphen_merging();
        store.save(&config).unwrap();

        assert!(store.path().exists());
        assert_eq!(store.load().unwrap(), config);
    }

    #[test]
    fn test_store_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let store = ConfigStore::at(&path);
        assert!(matches!(store.load(), Err(Error::Json(_))));
        assert_eq!(store.load_or_default(), CleanerConfig::default());
    }
}
