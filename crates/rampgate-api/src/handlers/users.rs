//! Account handlers

use axum::{extract::State, http::StatusCode};
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use crate::extractors::Caller;
use crate::state::AppState;

/// Delete the caller's account at the identity provider
///
/// One attempt. Any provider failure is reported as a generic 500.
#[utoipa::path(
    delete,
    path = "/api/users/me",
    tag = "Account",
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "Missing or invalid auth token", body = crate::error::ErrorResponse),
        (status = 500, description = "Identity provider refused the deletion", body = crate::error::ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn delete_current_user(
    State(state): State<Arc<AppState>>,
    Caller(caller): Caller,
) -> ApiResult<StatusCode> {
    match state.identity.delete_user(&caller.user_id).await {
        Ok(()) => {
            metrics::counter!("account_deletions_total", "outcome" => "success").increment(1);
            tracing::info!(user_id = %caller.user_id, "Account deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        Err(err) => {
            metrics::counter!("account_deletions_total", "outcome" => "failure").increment(1);
            tracing::warn!(user_id = %caller.user_id, error = %err, "Account deletion failed");
            Err(ApiError::UpstreamError)
        }
    }
}
