//! Custom Axum Extractors

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    http::{header::AUTHORIZATION, request::Parts},
};
use rampgate_auth::AuthenticatedCaller;
use std::convert::Infallible;
use std::sync::Arc;

use crate::dto::OnrampUrlRequest;
use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Authenticated Caller Extractor
// =============================================================================

/// Caller verified from the `Authorization` header
///
/// Runs before the body is read, so unauthenticated requests never reach
/// validation or any vendor call.
#[derive(Debug, Clone)]
pub struct Caller(pub AuthenticatedCaller);

#[async_trait]
impl FromRequestParts<Arc<AppState>> for Caller {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        // A non-UTF-8 header is present but unusable
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .map(|value| value.to_str().unwrap_or(""));

        let caller = state.verifier.verify(header).await?;
        Ok(Self(caller))
    }
}

// =============================================================================
// Lenient Body Extractor
// =============================================================================

/// On-ramp request body that never rejects
pub struct OnrampBody(pub OnrampUrlRequest);

#[async_trait]
impl<S> FromRequest<S> for OnrampBody
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.unwrap_or_default();
        Ok(Self(OnrampUrlRequest::from_json_lenient(&bytes)))
    }
}
