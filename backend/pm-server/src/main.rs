use pm_server::{AppState, ServerError, build_router};

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = pm_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    pm_config::logger::initialize(&config.logging, config.log_file_path()?)?;

    info!("Starting pm-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool (runs migrations)
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = pm_db::open_pool(&database_path)
        .await
        .map_err(ServerError::from)?;
    info!("Database ready");

    let app_state = AppState::new(pool.clone(), config.validation.clone());
    let app = build_router(app_state, &config.cors);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.clone(),
            source,
        })?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
