//! API error handling
//!
//! Library errors are mapped into [`ApiError`] exactly once, here. The body
//! is always `{"error": ..., "cause"?: ...}` with fixed, client-safe text.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rampgate_auth::AuthError;
use rampgate_onramp::OnrampError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to HTTP clients
#[derive(Debug, Error)]
pub enum ApiError {
    // =========================================================================
    // Client Errors
    // =========================================================================
    /// Missing or rejected bearer token
    #[error("{0}")]
    Unauthorized(String),

    /// Request arguments failed validation
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Not found")]
    NotFound,

    // =========================================================================
    // Upstream Errors
    // =========================================================================
    /// Vendor token exchange failed; safe to retry
    #[error("Unable to authenticate with fiat on-ramp provider.")]
    UpstreamUnavailable,

    /// Identity provider rejected the deletion
    #[error("Unable to delete user.")]
    UpstreamError,

    // =========================================================================
    // Internal Errors
    // =========================================================================
    /// Internal error (details are logged, never returned)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::InvalidArgument(_) => StatusCode::PRECONDITION_FAILED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::UpstreamUnavailable | Self::UpstreamError | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether the client may retry the same request
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::UpstreamUnavailable)
    }

    fn client_message(&self) -> String {
        match self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Fixed human-readable message
    pub error: String,
    /// Optional hint; never carries upstream detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        let cause = err
            .is_retryable()
            .then(|| "The provider may be temporarily unavailable. Retry later.".to_string());

        Self {
            error: err.client_message(),
            cause,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(detail) = &self {
            tracing::error!(error = %detail, "Internal error while handling request");
        }

        let status = self.status_code();
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingToken | AuthError::InvalidToken | AuthError::TokenExpired => {
                Self::Unauthorized(err.client_message())
            }
            AuthError::Upstream(_) => Self::UpstreamError,
            AuthError::Config(msg) => Self::Internal(msg),
        }
    }
}

impl From<OnrampError> for ApiError {
    fn from(err: OnrampError) -> Self {
        match err {
            OnrampError::BadAddress | OnrampError::MissingRedirect => {
                Self::InvalidArgument(err.to_string())
            }
            OnrampError::UpstreamUnavailable => Self::UpstreamUnavailable,
            OnrampError::Config(msg) | OnrampError::Internal(msg) => Self::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_mapping() {
        let err = ApiError::from(AuthError::MissingToken);
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.to_string(), "Missing auth token.");

        let err = ApiError::from(AuthError::TokenExpired);
        assert_eq!(err.to_string(), "Invalid auth token.");

        let err = ApiError::from(AuthError::Upstream("503 from provider".to_string()));
        assert!(matches!(err, ApiError::UpstreamError));
        assert_eq!(err.to_string(), "Unable to delete user.");
    }

    #[test]
    fn test_onramp_error_mapping() {
        let err = ApiError::from(OnrampError::BadAddress);
        assert_eq!(err.status_code(), StatusCode::PRECONDITION_FAILED);
        assert_eq!(err.to_string(), "Invalid wallet address.");

        let err = ApiError::from(OnrampError::MissingRedirect);
        assert_eq!(err.to_string(), "Client must provide a redirect URL");

        let err = ApiError::from(OnrampError::UpstreamUnavailable);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.is_retryable());
    }

    #[test]
    fn test_internal_detail_hidden() {
        let err = ApiError::from(OnrampError::Config("bad key sk_live_123".to_string()));
        let body = ErrorResponse::from(&err);
        assert_eq!(body.error, "An internal error occurred");
        assert!(body.cause.is_none());
    }

    #[test]
    fn test_retryable_cause() {
        let body = ErrorResponse::from(&ApiError::UpstreamUnavailable);
        assert_eq!(body.error, "Unable to authenticate with fiat on-ramp provider.");
        assert!(body.cause.is_some());
    }
}
