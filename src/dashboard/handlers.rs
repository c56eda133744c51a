use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
};

use super::models::ApiError;
use super::server::AppState;

/// Shown at `/` when the static page is missing
pub const MISSING_INDEX_HTML: &str = "<h1>Dashboard HTML not found</h1>";

/// Serve the dashboard page from the static directory
pub async fn serve_index(State(state): State<AppState>) -> Html<String> {
    let index_path = &state.index_path;
    match tokio::fs::read_to_string(index_path).await {
        Ok(content) => Html(content),
        Err(e) => {
            tracing::debug!("Could not read {}: {}", index_path.display(), e);
            Html(MISSING_INDEX_HTML.to_string())
        },
    }
}

/// Current snapshot of both collections
pub async fn get_dashboard(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.service.get_dashboard().await)
}

/// Reload the registry
pub async fn refresh(State(state): State<AppState>) -> impl IntoResponse {
    tracing::info!(operation = "refresh", "Dashboard operation");
    Json(state.service.refresh().await)
}

/// Liveness probe
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.service.health_check().await)
}

/// 404 Not Found handler
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ApiError::not_found()))
}
