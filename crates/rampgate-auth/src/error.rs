//! Authentication error types
//!
//! Errors are designed to be:
//! - Informative for logging/debugging
//! - Safe for external exposure (no provider internals leak)
//! - Convertible to HTTP status codes

use thiserror::Error;

/// Result type alias for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication error types
#[derive(Debug, Error)]
pub enum AuthError {
    // =========================================================================
    // Token Errors
    // =========================================================================
    /// No `Authorization` header on the request
    #[error("Missing auth token.")]
    MissingToken,

    /// Token is invalid (malformed, wrong signature, wrong audience, ...)
    #[error("Invalid auth token.")]
    InvalidToken,

    /// Token has expired
    #[error("Token has expired")]
    TokenExpired,

    // =========================================================================
    // Provider Errors
    // =========================================================================
    /// Identity provider call failed (network, non-2xx)
    #[error("Identity provider error: {0}")]
    Upstream(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingToken | Self::InvalidToken | Self::TokenExpired => 401,
            Self::Upstream(_) | Self::Config(_) => 500,
        }
    }

    /// Get an error code for the client (safe to expose)
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingToken => "MISSING_TOKEN",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Upstream(_) => "UPSTREAM_ERROR",
            Self::Config(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this error should be logged at error level
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// Get safe message for client (doesn't leak internal details)
    pub fn client_message(&self) -> String {
        match self {
            Self::Upstream(_) | Self::Config(_) => "An internal error occurred".to_string(),
            // Expiry is not distinguished from other token failures
            Self::TokenExpired => Self::InvalidToken.to_string(),
            _ => self.to_string(),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match err.kind() {
            ErrorKind::ExpiredSignature => Self::TokenExpired,
            _ => Self::InvalidToken,
        }
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        Self::Upstream(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::MissingToken.status_code(), 401);
        assert_eq!(AuthError::InvalidToken.status_code(), 401);
        assert_eq!(AuthError::TokenExpired.status_code(), 401);
        assert_eq!(AuthError::Upstream("boom".to_string()).status_code(), 500);
    }

    #[test]
    fn test_client_message_hides_internal_details() {
        let err = AuthError::Upstream("401 from https://auth.example with app secret".to_string());
        assert!(!err.client_message().contains("secret"));
        assert_eq!(err.client_message(), "An internal error occurred");
        assert!(err.is_server_error());
    }

    #[test]
    fn test_expired_is_reported_as_invalid() {
        assert_eq!(AuthError::TokenExpired.client_message(), "Invalid auth token.");
        assert_eq!(AuthError::MissingToken.client_message(), "Missing auth token.");
    }
}
