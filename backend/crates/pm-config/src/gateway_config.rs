use crate::server_config::{validate_host, validate_port};
use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_GATEWAY_PORT, DEFAULT_HOST,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_ROUTE_PREFIX, DEFAULT_UPSTREAM,
    MAX_REQUEST_TIMEOUT_SECS, MIN_REQUEST_TIMEOUT_SECS,
};

use std::collections::HashSet;

use serde::Deserialize;

/// One entry of the gateway route table.
///
/// ```toml
/// [[gateway.routes]]
/// path_prefix = "/project"
/// upstream = "http://127.0.0.1:8081"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteConfig {
    /// Requests whose path equals this prefix or continues it with `/` match
    pub path_prefix: String,
    /// Base URL the matched request is forwarded to (path is kept as is)
    pub upstream: String,
}

impl RouteConfig {
    pub fn new(path_prefix: impl Into<String>, upstream: impl Into<String>) -> Self {
        Self {
            path_prefix: path_prefix.into(),
            upstream: upstream.into(),
        }
    }

    fn validate(&self) -> ConfigErrorResult<()> {
        if !self.path_prefix.starts_with('/') {
            return Err(ConfigError::gateway(format!(
                "route path_prefix must start with '/', got '{}'",
                self.path_prefix
            )));
        }

        if self.path_prefix.len() > 1 && self.path_prefix.ends_with('/') {
            return Err(ConfigError::gateway(format!(
                "route path_prefix must not end with '/', got '{}'",
                self.path_prefix
            )));
        }

        // Upstreams are plain-HTTP services on the internal network
        if !self.upstream.starts_with("http://") {
            return Err(ConfigError::gateway(format!(
                "route upstream must be an http:// URL, got '{}'",
                self.upstream
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound for a single forwarded exchange
    pub request_timeout_secs: u64,
    pub routes: Vec<RouteConfig>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_GATEWAY_PORT,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            routes: vec![RouteConfig::new(DEFAULT_ROUTE_PREFIX, DEFAULT_UPSTREAM)],
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        validate_port("gateway.port", self.port)?;
        validate_host("gateway.host", &self.host)?;

        if self.request_timeout_secs < MIN_REQUEST_TIMEOUT_SECS
            || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS
        {
            return Err(ConfigError::gateway(format!(
                "gateway.request_timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        if self.routes.is_empty() {
            return Err(ConfigError::gateway("gateway.routes cannot be empty"));
        }

        let mut seen = HashSet::new();
        for route in &self.routes {
            route.validate()?;
            if !seen.insert(route.path_prefix.as_str()) {
                return Err(ConfigError::gateway(format!(
                    "duplicate gateway route for '{}'",
                    route.path_prefix
                )));
            }
        }

        Ok(())
    }

    /// Gateway bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
