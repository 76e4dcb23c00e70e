use pm_gateway::{GatewayState, build_router};

use std::error::Error;
use std::net::SocketAddr;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = pm_config::Config::load()?;
    config.validate()?;

    pm_config::logger::initialize(&config.logging, config.log_file_path()?)?;

    info!("Starting pm-gateway v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let state = GatewayState::new(&config.gateway)?;
    let app = build_router(state, &config.cors);

    let listener = TcpListener::bind(config.gateway.bind_addr()).await?;
    info!("Gateway listening on {}", listener.local_addr()?);

    // ConnectInfo feeds X-Forwarded-For
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

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
