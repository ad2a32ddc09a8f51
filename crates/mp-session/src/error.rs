use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Coarse classification of a [`SessionError`], for callers deciding how to react
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionErrorKind {
    /// The API answered with an error status or an unreadable body
    Remote,
    /// The operation needs a signed-in session
    Unauthenticated,
    /// The API could not be reached
    Transport,
    /// Local persistence failed
    Storage,
}

/// Errors that can occur during session operations
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Not signed in: {operation} requires an active session {location}")]
    Unauthenticated {
        operation: &'static str,
        location: ErrorLocation,
    },

    #[error("Storage error for key '{key}' at {path}: {source} {location}")]
    Storage {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    /// The stored bytes are not text; the record cannot be trusted
    #[error("Stored value for '{key}' at {path} is not valid UTF-8 {location}")]
    Malformed {
        key: String,
        path: PathBuf,
        location: ErrorLocation,
    },

    #[error("Invalid storage key '{key}' {location}")]
    InvalidKey {
        key: String,
        location: ErrorLocation,
    },
}

impl SessionError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        SessionError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        SessionError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API rejection error with location
    #[track_caller]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        SessionError::Api {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthenticated(operation: &'static str) -> Self {
        SessionError::Unauthenticated {
            operation,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage(key: impl Into<String>, path: PathBuf, source: std::io::Error) -> Self {
        SessionError::Storage {
            key: key.into(),
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn malformed(key: impl Into<String>, path: PathBuf) -> Self {
        SessionError::Malformed {
            key: key.into(),
            path,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_key(key: impl Into<String>) -> Self {
        SessionError::InvalidKey {
            key: key.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn kind(&self) -> SessionErrorKind {
        match self {
            Self::Http { .. } => SessionErrorKind::Transport,
            Self::Api { .. } | Self::Json { .. } => SessionErrorKind::Remote,
            Self::Unauthenticated { .. } => SessionErrorKind::Unauthenticated,
            Self::Storage { .. } | Self::Malformed { .. } | Self::InvalidKey { .. } => {
                SessionErrorKind::Storage
            }
        }
    }

    /// Whether retrying the same call could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http { .. } | Self::Storage { .. } => true,
            Self::Api { status, .. } => *status >= 500,
            Self::Json { .. }
            | Self::Unauthenticated { .. }
            | Self::Malformed { .. }
            | Self::InvalidKey { .. } => false,
        }
    }

    /// Message suitable for showing to the user (no source location).
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Http { .. } => "Unable to reach the marketplace server".to_string(),
            Self::Json { .. } => "Unexpected response from the marketplace server".to_string(),
            Self::Unauthenticated { .. } => "You are not signed in".to_string(),
            Self::Storage { .. } | Self::InvalidKey { .. } => {
                "Unable to save your session on this device".to_string()
            }
            Self::Malformed { .. } => "Saved session data is damaged".to_string(),
        }
    }
}

impl From<reqwest::Error> for SessionError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        SessionError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for SessionError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        SessionError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
