//! On-ramp URL handler

use axum::{extract::State, Json};
use rampgate_onramp::{OnrampError, OnrampRequest, ProviderKind};
use std::sync::Arc;

use crate::dto::OnrampUrlResponse;
use crate::error::ApiResult;
use crate::extractors::{Caller, OnrampBody};
use crate::state::AppState;

/// Create a funding URL for the caller's wallet
#[utoipa::path(
    post,
    path = "/api/onramp",
    tag = "On-ramp",
    request_body = crate::dto::OnrampUrlRequest,
    responses(
        (status = 200, description = "Funding URL issued", body = OnrampUrlResponse),
        (status = 401, description = "Missing or invalid auth token", body = crate::error::ErrorResponse),
        (status = 412, description = "Invalid wallet address or missing redirect URL", body = crate::error::ErrorResponse),
        (status = 500, description = "Vendor authentication failed", body = crate::error::ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn create_onramp_url(
    State(state): State<Arc<AppState>>,
    Caller(caller): Caller,
    OnrampBody(body): OnrampBody,
) -> ApiResult<Json<OnrampUrlResponse>> {
    let provider = state.onramp.kind();

    let request = OnrampRequest::new(
        body.address.as_deref(),
        body.email.as_deref(),
        body.redirect_url.as_deref(),
    )
    .map_err(|err| record_failure(provider, err))?;

    let url = state
        .onramp
        .build_url(&caller, &request)
        .await
        .map_err(|err| record_failure(provider, err))?;

    metrics::counter!("onramp_urls_issued_total", "provider" => provider.as_str()).increment(1);
    tracing::info!(user_id = %caller.user_id, provider = %provider, "On-ramp URL issued");

    Ok(Json(OnrampUrlResponse {
        url: url.to_string(),
    }))
}

fn record_failure(provider: ProviderKind, err: OnrampError) -> OnrampError {
    metrics::counter!(
        "onramp_failures_total",
        "provider" => provider.as_str(),
        "kind" => err.kind()
    )
    .increment(1);
    tracing::warn!(
        provider = %provider,
        kind = err.kind(),
        retryable = err.is_retryable(),
        "On-ramp request failed"
    );
    err
}
