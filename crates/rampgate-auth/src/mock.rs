//! In-memory identity provider for tests
//!
//! Tokens map directly to user ids. Every call is counted so tests can assert
//! that rejected requests never reach the provider or trigger side effects.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::error::{AuthError, AuthResult};
use crate::types::VerifiedClaims;
use crate::verifier::IdentityProvider;

pub const MOCK_APP_ID: &str = "mock-app";

#[derive(Default)]
pub struct MockIdentityProvider {
    tokens: HashMap<String, String>,
    expired: HashSet<String>,
    fail_delete: AtomicBool,
    verify_calls: AtomicUsize,
    deleted: Mutex<Vec<String>>,
}

impl MockIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `token` as a valid credential for `user_id`
    pub fn with_user(mut self, token: &str, user_id: &str) -> Self {
        self.tokens.insert(token.to_string(), user_id.to_string());
        self
    }

    /// Reject `token` as expired
    pub fn with_expired_token(mut self, token: &str) -> Self {
        self.expired.insert(token.to_string());
        self
    }

    /// Make every `delete_user` call fail
    pub fn failing_deletes(self) -> Self {
        self.fail_delete.store(true, Ordering::SeqCst);
        self
    }

    pub fn verify_calls(&self) -> usize {
        self.verify_calls.load(Ordering::SeqCst)
    }

    /// User ids passed to `delete_user`, in call order
    pub fn deleted_users(&self) -> Vec<String> {
        self.deleted.lock().map(|d| d.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn verify_auth_token(&self, token: &str) -> AuthResult<VerifiedClaims> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);

        if self.expired.contains(token) {
            return Err(AuthError::TokenExpired);
        }

        let user_id = self.tokens.get(token).ok_or(AuthError::InvalidToken)?;
        Ok(VerifiedClaims {
            app_id: MOCK_APP_ID.to_string(),
            issuer: "privy.io".to_string(),
            issued_at: 0,
            expiration: i64::MAX,
            session_id: None,
            user_id: user_id.clone(),
        })
    }

    async fn delete_user(&self, user_id: &str) -> AuthResult<()> {
        if let Ok(mut deleted) = self.deleted.lock() {
            deleted.push(user_id.to_string());
        }

        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(AuthError::Upstream("mock delete failure".to_string()));
        }
        Ok(())
    }
}
