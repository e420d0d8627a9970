//! Policy analysis route — multipart PDF upload in, structured report out.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/analyze-policy/", post(analyze_policy))
}

/// POST /analyze-policy/ — analyze an uploaded insurance policy PDF.
///
/// Takes the first multipart field carrying a filename. Non-`.pdf` filenames
/// are rejected with 400. Unreadable PDFs are not an error: extraction
/// degrades to empty text and the analysis returns an all-empty report.
async fn analyze_policy(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Response {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("An error occurred while processing the file: {e}"),
                );
            }
        };

        let filename = match field.file_name() {
            Some(name) => name.to_string(),
            None => continue,
        };

        if !filename.to_lowercase().ends_with(".pdf") {
            return error_response(
                StatusCode::BAD_REQUEST,
                "Only PDF files are supported".to_string(),
            );
        }

        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                return error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("An error occurred while processing the file: {e}"),
                );
            }
        };

        tracing::info!(filename = %filename, size = bytes.len(), "analyzing uploaded policy");

        let policy_text = clauselens_ingest::extract_text(&bytes);
        let result = state.analyzer.analyze(&policy_text);

        return Json(serde_json::json!({
            "filename": filename,
            "analysis": {
                "loopholes": result.loopholes,
                "benefits": result.summary.benefits,
                "major_exclusions": result.summary.major_exclusions,
                "coverage_highlights": result.summary.coverage_highlights,
            },
        }))
        .into_response();
    }

    error_response(StatusCode::BAD_REQUEST, "No file uploaded".to_string())
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
