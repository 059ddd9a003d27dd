use std::sync::Arc;
use tracing::info;

use cloud_drive::{
    api, config::Config, file_store::LocalFileStore, intent::TracingIntentSink,
    storage::Database, AppState,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    cloud_drive::logging::init_logging();

    info!(version = env!("CARGO_PKG_VERSION"), "cloud-drive starting");

    // Load configuration
    let config = Config::load()?;

    // Initialize database
    let db = Database::open(&config.node.data_dir)?;
    info!("Database opened at: {}", config.node.data_dir);

    // The upload root is created lazily on first save
    let file_store = LocalFileStore::new(&config.storage.upload_root)
        .with_naming(config.storage.naming);
    info!(
        naming = ?config.storage.naming,
        "Using upload root at: {}", config.storage.upload_root
    );

    // Create shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        file_store: Arc::new(file_store),
        intents: Arc::new(TracingIntentSink),
    });

    // Build and start the HTTP server
    let app = api::create_router(Arc::clone(&state));
    let listener = tokio::net::TcpListener::bind(&config.node.bind_address).await?;
    info!("Listening on: {}", config.node.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
