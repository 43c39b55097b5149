//! Player Presence API Server

mod config;
mod error;
mod handlers;
mod routes;
mod state;


use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (.env first, so it can set RUST_LOG too)
    dotenvy::dotenv().ok();
    let config = config::AppConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Player Presence API Server");
    info!(
        "Using database {} at {}:{}",
        config.database_name, config.database_host, config.database_port
    );

    // Create application state
    let state = state::AppState::new(&config);

    // Build router
    let app = routes::create_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
