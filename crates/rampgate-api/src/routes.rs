//! API Routes

use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::handlers;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Every route, with a JSON 404 for anything unmatched
pub fn app_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api", api_routes())
        .route("/health", get(handlers::health::health_check))
        .merge(docs_routes())
        .fallback(handlers::not_found)
}

/// Routes under `/api`
///
/// Unsupported methods fall through to a JSON 404 before authentication.
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/onramp",
            post(handlers::onramp::create_onramp_url).fallback(handlers::not_found),
        )
        .route(
            "/users/me",
            delete(handlers::users::delete_current_user).fallback(handlers::not_found),
        )
}

/// Machine-readable API description
pub fn docs_routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}
