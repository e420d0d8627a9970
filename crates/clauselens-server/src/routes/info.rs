//! Service information and health routes.

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}

/// GET / — basic API information.
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Insurance Policy Analyzer API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/analyze-policy/": "POST - Upload and analyze a PDF insurance policy",
            "/health": "GET - Health check endpoint",
            "/": "GET - This information",
        },
    }))
}

/// GET /health — liveness probe.
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}
