//! Summarize routes — the single POST endpoint plus a status probe.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/summarize", post(summarize))
        .route("/summarize/status", get(get_status))
}

#[derive(Debug, Deserialize)]
struct SummarizeRequest {
    logs: Option<String>,
}

/// POST /api/summarize — analyze raw logs into a weekly report.
///
/// The only user-visible error is a blank request. Model failures never
/// surface here; the model crate absorbs them into the heuristic report.
async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SummarizeRequest>,
) -> impl IntoResponse {
    let logs = match req.logs {
        Some(ref logs) if !logs.trim().is_empty() => logs,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": "Missing logs" })),
            );
        }
    };

    let report = weeklog_model::summarize_logs(&state.http, &state.model_config, logs).await;
    info!(
        "Summarized {} entries ({:?})",
        report.entries_parsed, report.source
    );

    (
        StatusCode::OK,
        Json(serde_json::to_value(&report).unwrap_or_default()),
    )
}

/// GET /api/summarize/status — model availability probe.
async fn get_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let resolved = state.model_config.resolve();
    Json(serde_json::json!({
        "modelAvailable": resolved.is_some(),
        "modelProvider": resolved.as_ref().map(|(p, _, _)| p.to_string()),
        "defaultModel": resolved.as_ref().map(|(_, m, _)| m.clone()),
    }))
}
