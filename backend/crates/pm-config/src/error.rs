use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Create a config error
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::generic("Config", message)
    }

    /// Create a database error
    #[track_caller]
    pub fn database<S: Into<String>>(message: S) -> Self {
        Self::generic("Database", message)
    }

    /// Create a logging error
    #[track_caller]
    pub fn logging<S: Into<String>>(message: S) -> Self {
        Self::generic("Logging", message)
    }

    /// Create a server error
    #[track_caller]
    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::generic("Server", message)
    }

    /// Create a gateway error
    #[track_caller]
    pub fn gateway<S: Into<String>>(message: S) -> Self {
        Self::generic("Gateway", message)
    }

    /// Create a CORS error
    #[track_caller]
    pub fn cors<S: Into<String>>(message: S) -> Self {
        Self::generic("Cors", message)
    }

    #[track_caller]
    fn generic<S: Into<String>>(category: &'static str, message: S) -> Self {
        ConfigError::Generic {
            category,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
