//! Application state shared across handlers
//!
//! Built once at startup and read-only afterwards.

use std::sync::Arc;

use rampgate_auth::{IdentityProvider, TokenVerifier};
use rampgate_onramp::OnrampProvider;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Bearer token verification
    pub verifier: TokenVerifier,
    /// Identity provider used for account deletion
    pub identity: Arc<dyn IdentityProvider>,
    /// Active on-ramp vendor
    pub onramp: OnrampProvider,
}

impl AppState {
    /// Create a new application state
    pub fn new(identity: Arc<dyn IdentityProvider>, onramp: OnrampProvider) -> Self {
        Self {
            verifier: TokenVerifier::new(identity.clone()),
            identity,
            onramp,
        }
    }
}
