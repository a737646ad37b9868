use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

use simple_storage_backend::application::services::StorageService;
use simple_storage_backend::config::AppConfig;
use simple_storage_backend::handlers::routes::create_router;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = AppConfig::from_env()?;
    let service = Arc::new(StorageService::new(config));

    // Bind the contract session once at startup. On failure the server still
    // starts and actions answer with a binding error until a restart.
    if let Err(e) = service.initialize().await {
        error!("Failed to bind contract session: {}", e);
    }

    // Create router
    let app = create_router(service);

    // Load server address from environment
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    // Start the server
    info!("Server running at http://{}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(addr).await?,
        app.into_make_service(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Application shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    info!("Received shutdown signal");
}
