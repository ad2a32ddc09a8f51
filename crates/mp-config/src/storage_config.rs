use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_DIR};

use serde::Deserialize;

/// Where the persisted session record lives
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for the key-value store, relative to the config directory unless absolute
    pub dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_STORAGE_DIR),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.dir.trim().is_empty() {
            return Err(ConfigError::invalid("storage.dir", "must not be empty"));
        }
        Ok(())
    }
}
