//! Rampgate Authentication Layer
//!
//! Bearer token verification for the Rampgate API. Tokens are issued by an
//! external identity provider (Privy-compatible); this crate only verifies
//! them and never mints its own.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Authentication Flow                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Authorization header ──▶ TokenVerifier                      │
//! │                               │                              │
//! │                   missing? ───┼──▶ MissingToken (no call)    │
//! │                               ▼                              │
//! │                     IdentityProvider::verify_auth_token      │
//! │                               │                              │
//! │                   any error ──┼──▶ InvalidToken              │
//! │                               ▼                              │
//! │                      AuthenticatedCaller                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod privy;
pub mod secret;
pub mod types;
pub mod verifier;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use config::IdentityConfig;
pub use error::{AuthError, AuthResult};
pub use privy::PrivyClient;
pub use secret::SecretString;
pub use types::{AuthenticatedCaller, VerifiedClaims};
pub use verifier::{extract_bearer_token, IdentityProvider, TokenVerifier};

#[cfg(any(test, feature = "mock"))]
pub use mock::MockIdentityProvider;
