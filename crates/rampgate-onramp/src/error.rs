//! On-ramp error types

use thiserror::Error;

/// Result type alias for on-ramp operations
pub type OnrampResult<T> = Result<T, OnrampError>;

/// Errors raised while producing a funding URL
#[derive(Debug, Error)]
pub enum OnrampError {
    // =========================================================================
    // Argument Errors
    // =========================================================================
    /// Wallet address missing, not a string, or malformed
    #[error("Invalid wallet address.")]
    BadAddress,

    /// Redirect URL required by this deployment but not provided
    #[error("Client must provide a redirect URL")]
    MissingRedirect,

    // =========================================================================
    // Vendor Errors
    // =========================================================================
    /// Vendor token exchange failed; the caller may retry with backoff
    #[error("Unable to authenticate with fiat on-ramp provider.")]
    UpstreamUnavailable,

    // =========================================================================
    // Internal Errors
    // =========================================================================
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not be exposed to clients)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl OnrampError {
    /// Whether the caller can expect a retry to succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::UpstreamUnavailable)
    }

    /// Short label for metrics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BadAddress => "bad_address",
            Self::MissingRedirect => "missing_redirect",
            Self::UpstreamUnavailable => "upstream_unavailable",
            Self::Config(_) => "config",
            Self::Internal(_) => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable() {
        assert!(OnrampError::UpstreamUnavailable.is_retryable());
        assert!(!OnrampError::BadAddress.is_retryable());
        assert!(!OnrampError::Internal("x".to_string()).is_retryable());
    }

    #[test]
    fn test_messages() {
        assert_eq!(OnrampError::BadAddress.to_string(), "Invalid wallet address.");
        assert_eq!(
            OnrampError::MissingRedirect.to_string(),
            "Client must provide a redirect URL"
        );
        assert_eq!(
            OnrampError::UpstreamUnavailable.to_string(),
            "Unable to authenticate with fiat on-ramp provider."
        );
    }
}
