use mp_config::ConfigError;
use mp_core::CoreError;
use mp_session::SessionError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors surfaced by the `marketplace` binary
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("Invalid input: {source}")]
    Input {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Session error: {source}")]
    Session {
        #[source]
        source: SessionError,
        location: ErrorLocation,
    },

    #[error("HTTP client setup failed: {source} {location}")]
    HttpClient {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Error serializing response: {source} {location}")]
    Output {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message printed on stderr; source locations are left to the log.
    pub fn user_message(&self) -> String {
        match self {
            Self::Input { source, .. } => match source {
                CoreError::Validation { message, .. } => message.clone(),
                CoreError::InvalidRole { value, .. } => {
                    format!("unknown account type '{value}' (expected vendor or client)")
                }
            },
            Self::Session { source, .. } => source.user_message(),
            other => other.to_string(),
        }
    }
}

impl From<ConfigError> for CliError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        CliError::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for CliError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        CliError::Input {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<SessionError> for CliError {
    #[track_caller]
    fn from(source: SessionError) -> Self {
        CliError::Session {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for CliError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        CliError::HttpClient {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        CliError::Output {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
