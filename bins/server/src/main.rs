//! Stepbook Server
//!
//! Main entry point for the Stepbook service.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stepbook_api::{AppState, create_router};
use stepbook_core::{ReportBook, document::DocumentRenderer, store::JsonFileStore};
use stepbook_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stepbook=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Open the collection; creates the file when missing
    let store = JsonFileStore::new(&config.storage.data_file);
    let renderer = DocumentRenderer::new(config.export.document_title.clone());
    let book = ReportBook::new(store, renderer);
    let reports = book.collection()?.len();
    info!(
        path = %config.storage.data_file.display(),
        reports,
        "Collection loaded"
    );

    // Create router
    let app = create_router(AppState::new(book, config.export));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
