//! Download endpoints.

use axum::{
    Router,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use stepbook_core::ReportBook;
use tracing::info;

use crate::{AppState, error::ApiError};

const JSON_CONTENT_TYPE: &str = "application/json";
const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Creates the export routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/exports/json", get(export_json))
        .route("/exports/pdf", get(export_pdf))
}

fn attachment(content_type: &str, filename: &str, body: impl IntoResponse) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response()
}

/// GET /exports/json - The persisted collection as a download.
async fn export_json(State(state): State<AppState>) -> Result<Response, ApiError> {
    let json = state.with_book(ReportBook::export_json).await?;
    Ok(attachment(
        JSON_CONTENT_TYPE,
        &state.export.json_filename,
        json,
    ))
}

/// GET /exports/pdf - The rendered document as a download.
async fn export_pdf(State(state): State<AppState>) -> Result<Response, ApiError> {
    let document = state
        .with_book(ReportBook::export_document)
        .await?
        .into_inner();
    info!(bytes = document.len(), "PDF export generated");
    Ok(attachment(
        PDF_CONTENT_TYPE,
        &state.export.pdf_filename,
        document,
    ))
}
