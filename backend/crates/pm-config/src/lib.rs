mod config;
mod cors_config;
mod database_config;
mod error;
mod gateway_config;
mod log_level;
pub mod logger;
mod logging_config;
mod server_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use cors_config::CorsConfig;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use gateway_config::{GatewayConfig, RouteConfig};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8081;
const DEFAULT_GATEWAY_PORT: u16 = 8082;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "projects.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:8080";
const DEFAULT_UPSTREAM: &str = "http://127.0.0.1:8081";
const DEFAULT_ROUTE_PREFIX: &str = "/project";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
