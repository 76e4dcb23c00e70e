use crate::{ConfigError, DEFAULT_LOG_LEVEL_STRING};

use std::ops::Deref;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Deserializer};

/// Wrapper for LevelFilter with custom deserialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub LevelFilter);

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?
            .unwrap_or_else(|| String::from(DEFAULT_LOG_LEVEL_STRING));

        LogLevel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        log_level.0
    }
}

impl Deref for LogLevel {
    type Target = LevelFilter;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" => Ok(LogLevel(LevelFilter::Off)),
            "error" => Ok(LogLevel(LevelFilter::Error)),
            "warn" => Ok(LogLevel(LevelFilter::Warn)),
            "info" => Ok(LogLevel(LevelFilter::Info)),
            "debug" => Ok(LogLevel(LevelFilter::Debug)),
            "trace" => Ok(LogLevel(LevelFilter::Trace)),
            other => Err(ConfigError::logging(format!(
                "logging.level must be one of off/error/warn/info/debug/trace, got '{}'",
                other
            ))),
        }
    }
}
