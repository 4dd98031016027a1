//! Privy-compatible identity provider client
//!
//! - Access tokens are ES256 JWTs verified locally against the app's
//!   verification key (issuer `privy.io`, audience = app id)
//! - User deletion goes through the provider's REST API with HTTP Basic
//!   credentials `app_id:app_secret`

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::IdentityConfig;
use crate::error::{AuthError, AuthResult};
use crate::types::VerifiedClaims;
use crate::verifier::IdentityProvider;

/// Header identifying the calling application
const APP_ID_HEADER: &str = "privy-app-id";

/// Raw access-token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub aud: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
    #[serde(default)]
    pub sid: Option<String>,
    pub sub: String,
}

impl From<TokenClaims> for VerifiedClaims {
    fn from(claims: TokenClaims) -> Self {
        Self {
            app_id: claims.aud,
            issuer: claims.iss,
            issued_at: claims.iat,
            expiration: claims.exp,
            session_id: claims.sid,
            user_id: claims.sub,
        }
    }
}

/// Identity provider backed by Privy
#[derive(Clone)]
pub struct PrivyClient {
    config: IdentityConfig,
    decoding_key: DecodingKey,
    http: reqwest::Client,
}

impl PrivyClient {
    pub fn new(config: IdentityConfig) -> AuthResult<Self> {
        let decoding_key = DecodingKey::from_ec_pem(config.verification_key.as_bytes())
            .map_err(|e| AuthError::Config(format!("invalid verification key: {}", e)))?;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| AuthError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            decoding_key,
            http,
        })
    }

    pub fn app_id(&self) -> &str {
        &self.config.app_id
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::ES256);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_audience(&[&self.config.app_id]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation
    }

    /// `{api_url}/api/v1/users/{user_id}` with the id as a single path segment
    fn user_url(&self, user_id: &str) -> AuthResult<Url> {
        let mut url = self.config.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| AuthError::Config("identity API URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(["api", "v1", "users", user_id]);
        Ok(url)
    }
}

#[async_trait]
impl IdentityProvider for PrivyClient {
    async fn verify_auth_token(&self, token: &str) -> AuthResult<VerifiedClaims> {
        let data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation())?;
        Ok(data.claims.into())
    }

    async fn delete_user(&self, user_id: &str) -> AuthResult<()> {
        let url = self.user_url(user_id)?;

        let response = self
            .http
            .delete(url)
            .basic_auth(&self.config.app_id, Some(self.config.app_secret.expose_secret()))
            .header(APP_ID_HEADER, &self.config.app_id)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::Upstream(format!(
                "user deletion returned HTTP {}",
                status.as_u16()
            )));
        }

        tracing::info!(user_id = %user_id, "Identity record deleted");
        Ok(())
    }
}
