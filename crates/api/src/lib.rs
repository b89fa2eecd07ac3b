//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST routes for reports and steps
//! - JSON and PDF download endpoints
//! - Error-to-response mapping

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use stepbook_core::{BookError, ReportBook};
use stepbook_shared::{AppError, AppResult, ExportConfig};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ApiJson, ApiPath};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The report collection and its store.
    pub book: Arc<ReportBook>,
    /// Download filenames.
    pub export: Arc<ExportConfig>,
}

impl AppState {
    /// Creates the state from a report book and export settings.
    pub fn new(book: ReportBook, export: ExportConfig) -> Self {
        Self {
            book: Arc::new(book),
            export: Arc::new(export),
        }
    }

    /// Runs `f` against the report book on the blocking thread pool.
    ///
    /// The book does file I/O under a mutex, so it never runs on an async
    /// worker.
    ///
    /// # Errors
    ///
    /// Returns the mapped [`BookError`], or [`AppError::Internal`] when `f`
    /// panics.
    pub async fn with_book<T, F>(&self, f: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&ReportBook) -> Result<T, BookError> + Send + 'static,
    {
        let book = Arc::clone(&self.book);
        tokio::task::spawn_blocking(move || f(&book))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?
            .map_err(AppError::from)
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
