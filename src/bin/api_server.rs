// API Server Binary Entry Point
//
// Purpose: Start the Axum API server over the seeded article catalog
// Usage: cargo run --bin api_server

use bias_lab_api::config::{ServerConfig, DEFAULT_LOG_FILTER};
use bias_lab_api::{create_router, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    // Configuration from environment variables
    let config = ServerConfig::from_env();
    tracing::info!("Configuration:");
    tracing::info!("  HOST: {}", config.host);
    tracing::info!("  PORT: {}", config.port);

    // Catalog is built once here and never mutated afterwards
    let state = AppState::new()?;

    let app = create_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
