use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use recommend_api::config::Config;
use recommend_api::routes::{create_router, AppState};
use recommend_api::services::{Catalog, Explainer, GeminiProvider, StaticCatalog};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let catalog = match &config.catalog_path {
        Some(path) => StaticCatalog::from_json_file(path)?,
        None => StaticCatalog::demo(),
    };
    tracing::info!(
        items = catalog.items().len(),
        source = config.catalog_path.as_deref().unwrap_or("built-in"),
        "Catalog loaded"
    );

    let generator = GeminiProvider::new(
        config.gemini_api_key.clone(),
        config.gemini_api_url.clone(),
        config.gemini_model.clone(),
        config.generation_timeout(),
    )?;

    let state = AppState::new(Arc::new(catalog), Explainer::new(Arc::new(generator)));
    let app = create_router(state);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received Ctrl+C, shutting down");
}
