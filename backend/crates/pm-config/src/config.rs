use crate::{
    ConfigError, ConfigErrorResult, CorsConfig, DatabaseConfig, GatewayConfig, LoggingConfig,
    ServerConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub cors: CorsConfig,
    pub validation: ValidationConfig,
    pub gateway: GatewayConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for PM_CONFIG_DIR env var, else use ./.pm/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PM_CONFIG_DIR env var > ./.pm/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("PM_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".pm"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.cors.validate()?;
        self.validation.validate()?;
        self.gateway.validate()?;

        // Database path must stay inside the config dir
        let db_path = Path::new(&self.database.path);
        if self.database.path.is_empty() || db_path.is_absolute() || self.database.path.contains("..")
        {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        if let Some(ref file) = self.logging.file
            && (file.is_empty() || file.contains('/') || file.contains('\\'))
        {
            return Err(ConfigError::logging(
                "logging.file must be a plain file name",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Path of the log file, if file logging is configured. Creates the log
    /// directory on the way.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(ref filename) = self.logging.file else {
            return Ok(None);
        };

        let log_dir = Self::config_dir()?.join(&self.logging.dir);
        std::fs::create_dir_all(&log_dir).map_err(|e| ConfigError::Io {
            path: log_dir.clone(),
            source: e,
        })?;

        Ok(Some(log_dir.join(filename)))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  cors: origins=[{}], credentials={}",
            self.cors.allowed_origins.join(", "),
            self.cors.allow_credentials
        );
        info!(
            "  validation: name={}, desc={}",
            self.validation.max_name_length, self.validation.max_description_length
        );
        info!(
            "  gateway: {}:{} (timeout {}s, {} route(s))",
            self.gateway.host,
            self.gateway.port,
            self.gateway.request_timeout_secs,
            self.gateway.routes.len()
        );
        for route in &self.gateway.routes {
            info!("    {} -> {}", route.path_prefix, route.upstream);
        }
    }

    fn apply_env_overrides(&mut self) -> ConfigErrorResult<()> {
        // Server
        Self::apply_env_string("PM_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("PM_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("PM_DATABASE_PATH", &mut self.database.path);

        // Logging
        if let Ok(val) = std::env::var("PM_LOG_LEVEL") {
            self.logging.level = val.parse()?;
        }
        Self::apply_env_bool("PM_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PM_LOG_FILE", &mut self.logging.file);

        // CORS
        if let Ok(val) = std::env::var("PM_CORS_ALLOWED_ORIGINS") {
            self.cors.allowed_origins = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
        Self::apply_env_bool("PM_CORS_ALLOW_CREDENTIALS", &mut self.cors.allow_credentials);

        // Validation
        Self::apply_env_parse(
            "PM_VALIDATION_MAX_NAME_LENGTH",
            &mut self.validation.max_name_length,
        );
        Self::apply_env_parse(
            "PM_VALIDATION_MAX_DESCRIPTION_LENGTH",
            &mut self.validation.max_description_length,
        );

        // Gateway
        Self::apply_env_string("PM_GATEWAY_HOST", &mut self.gateway.host);
        Self::apply_env_parse("PM_GATEWAY_PORT", &mut self.gateway.port);
        Self::apply_env_parse(
            "PM_GATEWAY_REQUEST_TIMEOUT_SECS",
            &mut self.gateway.request_timeout_secs,
        );
        // Single-backend deployments: point every route at one upstream
        if let Ok(upstream) = std::env::var("PM_GATEWAY_UPSTREAM") {
            for route in &mut self.gateway.routes {
                route.upstream = upstream.clone();
            }
        }

        Ok(())
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
