//! Runtime configuration for the task list.
//!
//! # Examples
//!
//! ```
//! use tasklist::config::TaskListConfig;
//!
//! let config = TaskListConfig::default().with_storage_key("work");
//! assert_eq!(config.storage_key, "work");
//! assert!(config.validate().is_ok());
//! ```

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::task::adapters::FileKeyValueStore;
use crate::task::services::DEFAULT_STORAGE_KEY;

/// Environment variable overriding [`TaskListConfig::data_dir`].
pub const DATA_DIR_ENV: &str = "TASKLIST_DATA_DIR";
/// Environment variable overriding [`TaskListConfig::storage_key`].
pub const STORAGE_KEY_ENV: &str = "TASKLIST_STORAGE_KEY";

const DEFAULT_DIR_NAME: &str = ".tasklist";

/// Errors raised by invalid configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The storage key cannot name a storage slot.
    #[error("invalid storage key '{0}': use letters, digits, '-', '_' or '.'")]
    InvalidStorageKey(String),

    /// The data directory is empty.
    #[error("data directory must not be empty")]
    EmptyDataDir,
}

/// Where and under which key the task list is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListConfig {
    /// Directory holding the stored task file.
    pub data_dir: Utf8PathBuf,
    /// Key the task collection is stored under.
    pub storage_key: String,
}

impl Default for TaskListConfig {
    fn default() -> Self {
        Self {
            data_dir: Utf8PathBuf::from(DEFAULT_DIR_NAME),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
        }
    }
}

impl TaskListConfig {
    /// Builds configuration from the process environment.
    ///
    /// `TASKLIST_DATA_DIR` and `TASKLIST_STORAGE_KEY` take precedence;
    /// otherwise the data directory is `$HOME/.tasklist`, falling back to
    /// `.tasklist` in the working directory.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let data_dir = non_empty(DATA_DIR_ENV)
            .map(Utf8PathBuf::from)
            .or_else(|| {
                non_empty("HOME").map(|home| Utf8PathBuf::from(home).join(DEFAULT_DIR_NAME))
            })
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DIR_NAME));
        let storage_key =
            non_empty(STORAGE_KEY_ENV).unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_owned());
        Self {
            data_dir,
            storage_key,
        }
    }

    /// Sets the data directory.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<Utf8PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Sets the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    /// Checks that the configuration can be used to open a store.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the data directory is empty or the key
    /// is not a plain file-safe name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_dir.as_str().trim().is_empty() {
            return Err(ConfigError::EmptyDataDir);
        }
        FileKeyValueStore::file_name_for(&self.storage_key)
            .map_err(|_| ConfigError::InvalidStorageKey(self.storage_key.clone()))?;
        Ok(())
    }
}
