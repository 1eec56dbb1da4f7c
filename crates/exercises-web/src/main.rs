//! Story server entry point.

use std::error::Error;

use clap::Parser;
use exercises_web::build_router;
use exercises_web::config::ServerConfig;
use exercises_web::error::AppError;
use exercises_web::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServerConfig::parse();

    // Story and template are loaded once; failures stop startup.
    let app_state = AppState::load(&config)?;
    let app = build_router(app_state);

    let addr = config.socket_addr();
    tracing::info!("Starting the server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(AppError::Server)?;

    axum::serve(listener, app).await.map_err(AppError::Server)?;

    Ok(())
}
