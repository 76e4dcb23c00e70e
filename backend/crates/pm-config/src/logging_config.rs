use crate::{DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Log directory, relative to the config directory
    pub dir: String,
    /// Log file name inside `dir`. None = stdout
    pub file: Option<String>,
    /// Colored stdout output (ignored when logging to a file)
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: None,
            colored: true,
        }
    }
}
