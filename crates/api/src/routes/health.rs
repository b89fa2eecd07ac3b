//! Health check endpoints.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use stepbook_core::ReportBook;
use tracing::warn;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `healthy`, or `degraded` when the collection file cannot be read.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Number of stored reports, when readable.
    pub reports: Option<usize>,
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let reports = match state.with_book(ReportBook::collection).await {
        Ok(collection) => Some(collection.len()),
        Err(e) => {
            warn!(error = %e, "Collection unreadable during health check");
            None
        }
    };

    Json(HealthResponse {
        status: if reports.is_some() { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        reports,
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
