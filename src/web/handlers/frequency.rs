// GET /word_frequency — run the analysis pipeline for one topic.
//
// Both query parameters are required: `topic` (the article title) and `n`
// (how many words to return). Validation failures are rejected here with
// 400 before the pipeline runs; pipeline failures are translated from
// AnalyzeError kinds to status codes. Nothing below this layer knows
// about HTTP.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::pipeline::{self, AnalyzeError};
use crate::web::{api_error, AppState};
use crate::wiki::FetchError;

#[derive(Deserialize, Default)]
pub struct FrequencyQuery {
    pub topic: Option<String>,
    /// Kept as a raw string so a non-numeric value gets the same 400
    /// treatment as a missing one instead of a framework rejection.
    pub n: Option<String>,
}

/// GET /word_frequency?topic=<title>&n=<count>
pub async fn word_frequency(
    State(state): State<AppState>,
    Query(params): Query<FrequencyQuery>,
) -> Response {
    let topic = match params.topic.as_deref() {
        Some(t) if !t.is_empty() => t,
        _ => {
            return api_error(
                StatusCode::BAD_REQUEST,
                "Invalid input. Both topic and n are required.",
            )
        }
    };

    let n_raw = match params.n.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => {
            return api_error(
                StatusCode::BAD_REQUEST,
                "Invalid input. Both topic and n are required.",
            )
        }
    };

    let n = match n_raw.parse::<i64>() {
        Ok(v) if v > 0 => v as usize,
        _ => {
            return api_error(
                StatusCode::BAD_REQUEST,
                "Invalid value for n. Please provide a positive integer.",
            )
        }
    };

    match pipeline::analyze_topic(&state.wiki, &state.db, topic, n).await {
        Ok(counts) => Json(serde_json::json!({ "word_frequency": counts })).into_response(),
        Err(AnalyzeError::Fetch(FetchError::NotFound)) => api_error(
            StatusCode::NOT_FOUND,
            "Invalid topic. Wikipedia article not found.",
        ),
        Err(AnalyzeError::Fetch(FetchError::Request(e))) => {
            tracing::warn!(error = %e, topic = topic, "Wikipedia fetch failed");
            api_error(
                StatusCode::NOT_FOUND,
                "Invalid topic. Wikipedia article not found.",
            )
        }
        Err(AnalyzeError::Fetch(FetchError::MissingTitle)) => api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to retrieve article details from Wikipedia.",
        ),
        Err(AnalyzeError::EmptyText) => api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to retrieve clean article text from Wikipedia.",
        ),
        Err(AnalyzeError::Storage(e)) => {
            tracing::error!(error = %e, topic = topic, "Failed to persist history entry");
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to record search history.",
            )
        }
    }
}
