use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_API_BASE_URL, MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Configuration for the marketplace REST API
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin plus base path, e.g. `http://localhost:8000/api`
    pub base_url: String,
    /// Transport-level request timeout. None = no timeout
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_BASE_URL),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::invalid(
                "api.base_url",
                format!("must start with http:// or https://, got '{}'", self.base_url),
            ));
        }

        if let Some(secs) = self.timeout_secs
            && !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&secs)
        {
            return Err(ConfigError::invalid(
                "api.timeout_secs",
                format!("must be {MIN_TIMEOUT_SECS}-{MAX_TIMEOUT_SECS} seconds, got {secs}"),
            ));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
