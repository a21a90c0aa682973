// Web server — Axum-based JSON API.
//
// Two endpoints: /word_frequency runs the analysis pipeline and
// /search_history returns the persisted log. CORS is wide open (this is
// a public read-only API); every request is traced.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::db::Database;
use crate::wiki::WikiClient;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn Database>,
    pub wiki: Arc<WikiClient>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(
    db: Arc<dyn Database>,
    wiki: Arc<WikiClient>,
    port: u16,
    bind: &str,
) -> Result<()> {
    let state = AppState { db, wiki };
    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Wordmill listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the router. Public so integration tests can drive it in-process.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/word_frequency", get(handlers::frequency::word_frequency))
        .route("/search_history", get(handlers::history::search_history))
        .route("/health", get(health))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
