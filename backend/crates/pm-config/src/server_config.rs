use crate::{ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_PORT, MIN_PORT};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        validate_port("server.port", self.port)?;
        validate_host("server.host", &self.host)
    }
}

/// Port 0 means "auto-assign". Any other port must be >= MIN_PORT.
pub(crate) fn validate_port(key: &str, port: u16) -> ConfigErrorResult<()> {
    if port != 0 && port < MIN_PORT {
        return Err(ConfigError::server(format!(
            "{} must be 0 (auto) or >= {}, got {}",
            key, MIN_PORT, port
        )));
    }
    Ok(())
}

pub(crate) fn validate_host(key: &str, host: &str) -> ConfigErrorResult<()> {
    if host.trim().is_empty() {
        return Err(ConfigError::server(format!("{} cannot be empty", key)));
    }
    Ok(())
}
