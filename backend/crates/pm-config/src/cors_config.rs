use crate::{ConfigError, ConfigErrorResult, DEFAULT_ALLOWED_ORIGIN};

use serde::Deserialize;

/// Cross-origin policy shared by the project service and the gateway.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Exact origins allowed to call the API, e.g. `http://localhost:8080`
    pub allowed_origins: Vec<String>,
    /// Whether browsers may send cookies / authorization headers
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![String::from(DEFAULT_ALLOWED_ORIGIN)],
            allow_credentials: true,
        }
    }
}

impl CorsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.allowed_origins.is_empty() {
            return Err(ConfigError::cors("cors.allowed_origins cannot be empty"));
        }

        for origin in &self.allowed_origins {
            if origin == "*" {
                // Browsers reject a wildcard origin on credentialed requests
                if self.allow_credentials {
                    return Err(ConfigError::cors(
                        "cors.allowed_origins cannot contain '*' when allow_credentials is true",
                    ));
                }
                continue;
            }

            if !(origin.starts_with("http://") || origin.starts_with("https://")) {
                return Err(ConfigError::cors(format!(
                    "cors origin must start with http:// or https://, got '{}'",
                    origin
                )));
            }

            if origin.ends_with('/') {
                return Err(ConfigError::cors(format!(
                    "cors origin must not end with '/', got '{}'",
                    origin
                )));
            }
        }

        Ok(())
    }

    /// True when every origin is allowed.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}
