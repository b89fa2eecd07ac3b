//! Report and step routes.
//!
//! Every mutation answers with the resulting collection and a `changed` flag
//! so the caller knows whether to refresh its view. Blank names and step texts
//! are accepted and ignored (`changed: false`).

use axum::{
    Json, Router,
    extract::State,
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};
use stepbook_core::{Outcome, ReportBook};
use stepbook_core::reports::{Action, Collection, Report};
use stepbook_shared::AppError;

use crate::{
    AppState,
    error::{ApiError, ApiJson, ApiPath},
};

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports", get(list_reports).post(create_report))
        .route("/reports/{report}", get(get_report).delete(delete_report))
        .route("/reports/{report}/steps", post(add_step))
        .route("/reports/{report}/steps/{step}", delete(delete_step))
}

// ============================================================================
// Request / Response Types
// ============================================================================

/// Body of `POST /reports`.
#[derive(Debug, Deserialize)]
pub struct CreateReportRequest {
    /// Report name.
    pub name: String,
}

/// Body of `POST /reports/{report}/steps`.
#[derive(Debug, Deserialize)]
pub struct AddStepRequest {
    /// Step text.
    pub text: String,
}

/// Response to every mutation.
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    /// Whether the collection was modified.
    pub changed: bool,
    /// Collection after the mutation.
    pub reports: Collection,
}

impl From<Outcome> for MutationResponse {
    fn from(outcome: Outcome) -> Self {
        Self {
            changed: outcome.change.is_changed(),
            reports: outcome.collection,
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /reports - The whole collection in display order.
async fn list_reports(State(state): State<AppState>) -> Result<Json<Collection>, ApiError> {
    Ok(Json(state.with_book(ReportBook::collection).await?))
}

/// GET `/reports/{report}` - One report by index.
async fn get_report(
    State(state): State<AppState>,
    ApiPath(report): ApiPath<usize>,
) -> Result<Json<Report>, ApiError> {
    let collection = state.with_book(ReportBook::collection).await?;
    collection
        .get(report)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("report {report}")).into())
}

/// POST /reports - Create an empty report.
async fn create_report(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateReportRequest>,
) -> Result<Json<MutationResponse>, ApiError> {
    execute(&state, Action::CreateReport { name: payload.name }).await
}

/// DELETE `/reports/{report}` - Delete a report with all its steps.
async fn delete_report(
    State(state): State<AppState>,
    ApiPath(report): ApiPath<usize>,
) -> Result<Json<MutationResponse>, ApiError> {
    execute(&state, Action::DeleteReport { report }).await
}

/// POST `/reports/{report}/steps` - Append a step.
async fn add_step(
    State(state): State<AppState>,
    ApiPath(report): ApiPath<usize>,
    ApiJson(payload): ApiJson<AddStepRequest>,
) -> Result<Json<MutationResponse>, ApiError> {
    execute(
        &state,
        Action::AddStep {
            report,
            text: payload.text,
        },
    )
    .await
}

/// DELETE `/reports/{report}/steps/{step}` - Delete a step.
async fn delete_step(
    State(state): State<AppState>,
    ApiPath((report, step)): ApiPath<(usize, usize)>,
) -> Result<Json<MutationResponse>, ApiError> {
    execute(&state, Action::DeleteStep { report, step }).await
}

async fn execute(state: &AppState, action: Action) -> Result<Json<MutationResponse>, ApiError> {
    let outcome = state.with_book(move |book| book.execute(&action)).await?;
    Ok(Json(outcome.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{TestApp, send};
    use axum::http::StatusCode;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_onboarding_flow() {
        let app = TestApp::new();

        let (status, body) = send(&app, "POST", "/reports", Some(json!({"name": "Onboarding"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["changed"], true);

        for text in ["Sign contract", "Setup account"] {
            send(&app, "POST", "/reports/0/steps", Some(json!({ "text": text }))).await;
        }
        assert_eq!(
            app.persisted(),
            json!([{ "name": "Onboarding", "steps": ["Sign contract", "Setup account"] }])
        );

        let (status, body) = send(&app, "DELETE", "/reports/0/steps/0", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reports"][0]["steps"], json!(["Setup account"]));
        assert_eq!(
            app.persisted(),
            json!([{ "name": "Onboarding", "steps": ["Setup account"] }])
        );
    }

    #[rstest]
    #[case("/reports", json!({"name": "   "}))]
    #[case("/reports/0/steps", json!({"text": ""}))]
    #[tokio::test]
    async fn test_blank_input_is_ignored(#[case] uri: &str, #[case] payload: Value) {
        let app = TestApp::new();
        send(&app, "POST", "/reports", Some(json!({"name": "Audit"}))).await;

        let (status, body) = send(&app, "POST", uri, Some(payload)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["changed"], false);
        assert_eq!(app.persisted(), json!([{ "name": "Audit", "steps": [] }]));
    }

    #[tokio::test]
    async fn test_list_and_get_report() {
        let app = TestApp::new();
        send(&app, "POST", "/reports", Some(json!({"name": "A"}))).await;
        send(&app, "POST", "/reports", Some(json!({"name": "B"}))).await;

        let (status, body) = send(&app, "GET", "/reports", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{ "name": "A", "steps": [] }, { "name": "B", "steps": [] }])
        );

        let (status, body) = send(&app, "GET", "/reports/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "B");
    }

    #[tokio::test]
    async fn test_delete_report() {
        let app = TestApp::new();
        send(&app, "POST", "/reports", Some(json!({"name": "A"}))).await;
        send(&app, "POST", "/reports", Some(json!({"name": "B"}))).await;

        let (status, body) = send(&app, "DELETE", "/reports/0", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reports"], json!([{ "name": "B", "steps": [] }]));
    }

    #[rstest]
    #[case("GET", "/reports/0")]
    #[case("DELETE", "/reports/0")]
    #[case("DELETE", "/reports/0/steps/0")]
    #[tokio::test]
    async fn test_missing_index_is_not_found(#[case] method: &str, #[case] uri: &str) {
        let app = TestApp::new();

        let (status, body) = send(&app, method, uri, None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }

    #[rstest]
    #[case("DELETE", "/reports/abc", None)]
    #[case("DELETE", "/reports/0/steps/-1", None)]
    #[case("POST", "/reports", Some(json!({"title": "x"})))]
    #[case("POST", "/reports/0/steps", Some(json!({"text": 7})))]
    #[tokio::test]
    async fn test_malformed_request_is_validation_error(
        #[case] method: &str,
        #[case] uri: &str,
        #[case] payload: Option<Value>,
    ) {
        let app = TestApp::new();
        send(&app, "POST", "/reports", Some(json!({"name": "Audit"}))).await;

        let (status, body) = send(&app, method, uri, payload).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
        assert_eq!(app.persisted(), json!([{ "name": "Audit", "steps": [] }]));
    }

    #[tokio::test]
    async fn test_unreadable_store_is_storage_error() {
        let app = TestApp::unreadable();

        let (status, body) = send(&app, "GET", "/reports", None).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "STORAGE_ERROR");
    }
}
