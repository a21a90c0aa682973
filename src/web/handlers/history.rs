// GET /search_history — the full persisted query log.
//
// Returns every row in insertion order. No pagination, no filtering:
// the log is append-only and each entry is small.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::web::{api_error, AppState};

/// GET /search_history — all recorded searches, oldest first.
pub async fn search_history(State(state): State<AppState>) -> Response {
    match state.db.search_history().await {
        Ok(records) => {
            let entries: Vec<serde_json::Value> = records
                .iter()
                .map(|r| serde_json::json!({ "topic": r.topic, "top_words": r.top_words }))
                .collect();
            Json(serde_json::json!({ "search_history": entries })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "DB error reading search history");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
        }
    }
}
