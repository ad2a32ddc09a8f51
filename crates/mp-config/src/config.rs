use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    LoggingConfig, StorageConfig,
};

use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Read `config.toml` from [`Config::config_dir`] (created if missing), falling
    /// back to defaults when there is no file, then apply `MP_*` overrides.
    ///
    /// Values are not checked here; call [`Config::validate`] once any command-line
    /// overrides have been applied too.
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::io(&config_dir, e))?;

        let config_path = config_dir.join(CONFIG_FILENAME);
        let mut config = match std::fs::read_to_string(&config_path) {
            Ok(contents) => {
                toml::from_str(&contents).map_err(|e| ConfigError::toml(&config_path, e))?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Config::default(),
            Err(e) => return Err(ConfigError::io(&config_path, e)),
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Get the config directory.
    /// Priority: MP_CONFIG_DIR env var > ./.marketplace/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|e| ConfigError::config_dir(format!("no usable working directory: {e}")))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.storage.validate()?;

        if let Some(file) = &self.logging.file
            && file.trim().is_empty()
        {
            return Err(ConfigError::invalid("logging.file", "must not be empty when set"));
        }

        Ok(())
    }

    /// Absolute path of the session storage directory.
    pub fn storage_path(&self) -> ConfigErrorResult<PathBuf> {
        Self::resolve(&self.storage.dir)
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        self.logging.file.as_deref().map(Self::resolve).transpose()
    }

    fn resolve(path: &str) -> ConfigErrorResult<PathBuf> {
        let path = Path::new(path);
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }
        Ok(Self::config_dir()?.join(path))
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  api: {}", self.api.base_url);
        match self.api.timeout_secs {
            Some(secs) => info!("  api timeout: {secs}s"),
            None => info!("  api timeout: none"),
        }
        info!("  storage: {}", self.storage.dir);
        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        if let Some(url) = env_string("MP_API_BASE_URL") {
            self.api.base_url = url;
        }
        if let Some(secs) = env_parse("MP_API_TIMEOUT_SECS") {
            self.api.timeout_secs = Some(secs);
        }

        if let Some(dir) = env_string("MP_STORAGE_DIR") {
            self.storage.dir = dir;
        }

        if let Some(level) = env_parse("MP_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(colored) = env_string("MP_LOG_COLORED") {
            self.logging.colored = matches!(
                colored.trim().to_ascii_lowercase().as_str(),
                "true" | "1" | "yes"
            );
        }
        if let Some(file) = env_string("MP_LOG_FILE") {
            self.logging.file = Some(file);
        }
    }
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Unparseable values are ignored, keeping the file or default value
fn env_parse<T: FromStr>(name: &str) -> Option<T> {
    env_string(name)?.trim().parse().ok()
}
