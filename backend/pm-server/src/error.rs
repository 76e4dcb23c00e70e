use thiserror::Error;

/// Startup failures of the project service binary.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] pm_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] pm_db::DbError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
