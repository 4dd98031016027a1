//! Health Check Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::dto::HealthResponse;
use crate::state::AppState;

/// Health check endpoint
///
/// Returns 200 while the process is serving. Does not contact any vendor.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0);

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp,
        provider: state.onramp.kind().to_string(),
    })
}
