//! Bearer token verification
//!
//! [`TokenVerifier`] turns an `Authorization` header into an
//! [`AuthenticatedCaller`]. Provider-specific failures are collapsed into
//! [`AuthError::InvalidToken`] so clients never see why a token was refused.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::{AuthError, AuthResult};
use crate::types::{AuthenticatedCaller, VerifiedClaims};

/// External identity provider
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verify an access token and return its claims
    async fn verify_auth_token(&self, token: &str) -> AuthResult<VerifiedClaims>;

    /// Delete the user record keyed by `user_id`
    async fn delete_user(&self, user_id: &str) -> AuthResult<()>;
}

/// Verifies inbound bearer credentials
#[derive(Clone)]
pub struct TokenVerifier {
    provider: Arc<dyn IdentityProvider>,
}

impl TokenVerifier {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    /// Verify the raw `Authorization` header value
    ///
    /// A missing header fails without contacting the provider. Single attempt,
    /// no retries.
    pub async fn verify(&self, header: Option<&str>) -> AuthResult<AuthenticatedCaller> {
        let header = header.ok_or(AuthError::MissingToken)?;
        let token = extract_bearer_token(header).ok_or(AuthError::InvalidToken)?;

        match self.provider.verify_auth_token(token).await {
            Ok(claims) => Ok(AuthenticatedCaller::from_claims(claims)),
            Err(err) if err.is_server_error() => {
                tracing::warn!(
                    reason = err.error_code(),
                    "Identity provider failed during token verification"
                );
                Err(AuthError::InvalidToken)
            }
            Err(err) => {
                tracing::debug!(reason = err.error_code(), "Auth token rejected");
                Err(AuthError::InvalidToken)
            }
        }
    }
}

/// Strip a leading `Bearer ` scheme; `None` if nothing is left
pub fn extract_bearer_token(header: &str) -> Option<&str> {
    let token = header.strip_prefix("Bearer ").unwrap_or(header).trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockIdentityProvider;

    fn verifier_with(mock: &Arc<MockIdentityProvider>) -> TokenVerifier {
        TokenVerifier::new(mock.clone())
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc.def"), Some("abc.def"));
        assert_eq!(extract_bearer_token("abc.def"), Some("abc.def"));
        assert_eq!(extract_bearer_token("Bearer "), None);
        assert_eq!(extract_bearer_token(""), None);
    }

    #[tokio::test]
    async fn test_missing_header_skips_provider() {
        let mock = Arc::new(MockIdentityProvider::new());
        let verifier = verifier_with(&mock);

        let result = verifier.verify(None).await;
        assert!(matches!(result, Err(AuthError::MissingToken)));
        assert_eq!(mock.verify_calls(), 0);
    }

    #[tokio::test]
    async fn test_valid_token() {
        let mock = Arc::new(MockIdentityProvider::new().with_user("good-token", "did:privy:alice"));
        let verifier = verifier_with(&mock);

        let caller = verifier.verify(Some("Bearer good-token")).await.unwrap();
        assert_eq!(caller.user_id, "did:privy:alice");
        assert_eq!(mock.verify_calls(), 1);
    }

    #[tokio::test]
    async fn test_provider_errors_are_normalized() {
        let mock = Arc::new(MockIdentityProvider::new().with_expired_token("old-token"));
        let verifier = verifier_with(&mock);

        let expired = verifier.verify(Some("Bearer old-token")).await;
        assert!(matches!(expired, Err(AuthError::InvalidToken)));

        let unknown = verifier.verify(Some("Bearer nope")).await;
        assert!(matches!(unknown, Err(AuthError::InvalidToken)));
        assert_eq!(mock.verify_calls(), 2);
    }

    struct UnreachableProvider;

    #[async_trait]
    impl IdentityProvider for UnreachableProvider {
        async fn verify_auth_token(&self, _token: &str) -> AuthResult<VerifiedClaims> {
            Err(AuthError::Upstream("connection refused".to_string()))
        }

        async fn delete_user(&self, _user_id: &str) -> AuthResult<()> {
            Err(AuthError::Upstream("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_provider_outage_is_invalid_token() {
        let verifier = TokenVerifier::new(Arc::new(UnreachableProvider));

        let result = verifier.verify(Some("Bearer good-token")).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
        assert!(AuthError::Upstream("connection refused".to_string()).is_server_error());
        assert!(!AuthError::TokenExpired.is_server_error());
    }

    #[tokio::test]
    async fn test_empty_bearer_is_invalid() {
        let mock = Arc::new(MockIdentityProvider::new());
        let verifier = verifier_with(&mock);

        let result = verifier.verify(Some("Bearer ")).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
        assert_eq!(mock.verify_calls(), 0);
    }
}
