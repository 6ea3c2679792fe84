//! Application builder: wires router, middleware and state into a server.

use axum::Router;
use tokio::net::TcpListener;

use cardoctor_core::config::AppConfig;
use cardoctor_core::error::AppError;
use cardoctor_store::StoreManager;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application from configuration and an opened store.
pub fn build_app(config: AppConfig, store: StoreManager) -> Result<Router, AppError> {
    let state = AppState::new(config, store)?;
    Ok(build_router(state))
}

/// Runs the Car Doctor server until Ctrl-C.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Car Doctor server...");

    tracing::info!(
        "Initializing document store (provider: {})...",
        config.store.provider
    );
    let store = StoreManager::new(&config.store).await?;

    match store.ping().await {
        Ok(true) => tracing::info!("Pinged the document store. Connection is healthy"),
        Ok(false) => tracing::warn!("Document store ping returned an unhealthy status"),
        Err(e) => tracing::warn!(error = %e, "Document store ping failed"),
    }

    let addr = config.server.bind_address();
    let app = build_app(config, store)?;

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Car Doctor server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Car Doctor server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
