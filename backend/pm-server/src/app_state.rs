use pm_config::ValidationConfig;

use sqlx::SqlitePool;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub validation: ValidationConfig,
}

impl AppState {
    pub fn new(pool: SqlitePool, validation: ValidationConfig) -> Self {
        Self { pool, validation }
    }
}
