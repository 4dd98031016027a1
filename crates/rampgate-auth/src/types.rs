//! Core authentication types

use serde::{Deserialize, Serialize};

/// Claims carried by a verified identity-provider access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedClaims {
    /// Application the token was issued for (`aud`)
    pub app_id: String,
    /// Token issuer (`iss`)
    pub issuer: String,
    /// Issued-at, seconds since epoch (`iat`)
    pub issued_at: i64,
    /// Expiration, seconds since epoch (`exp`)
    pub expiration: i64,
    /// Provider session id (`sid`)
    pub session_id: Option<String>,
    /// Stable user id (`sub`)
    pub user_id: String,
}

/// Caller identity established for a single request
///
/// Built from a bearer token by [`crate::TokenVerifier`] and dropped when
/// the request completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedCaller {
    pub user_id: String,
    pub session_id: Option<String>,
    pub claims: VerifiedClaims,
}

impl AuthenticatedCaller {
    pub fn from_claims(claims: VerifiedClaims) -> Self {
        Self {
            user_id: claims.user_id.clone(),
            session_id: claims.session_id.clone(),
            claims,
        }
    }
}

impl From<VerifiedClaims> for AuthenticatedCaller {
    fn from(claims: VerifiedClaims) -> Self {
        Self::from_claims(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_from_claims() {
        let claims = VerifiedClaims {
            app_id: "app".to_string(),
            issuer: "privy.io".to_string(),
            issued_at: 1,
            expiration: 2,
            session_id: Some("sess".to_string()),
            user_id: "did:privy:abc".to_string(),
        };

        let caller = AuthenticatedCaller::from(claims.clone());
        assert_eq!(caller.user_id, "did:privy:abc");
        assert_eq!(caller.session_id.as_deref(), Some("sess"));
        assert_eq!(caller.claims, claims);
    }
}
