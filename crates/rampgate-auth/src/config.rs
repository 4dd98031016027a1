//! Identity provider configuration

use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::secret::SecretString;

/// Default identity provider API
pub const DEFAULT_API_URL: &str = "https://auth.privy.io";

/// Issuer claim expected on access tokens
pub const DEFAULT_ISSUER: &str = "privy.io";

/// Identity provider settings
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    /// Application id; also the expected `aud` claim
    #[serde(default)]
    pub app_id: String,
    /// Application secret used for server-to-server calls
    #[serde(default)]
    pub app_secret: SecretString,
    /// PEM-encoded ES256 public key used to verify access tokens
    #[serde(default)]
    pub verification_key: String,
    /// Base URL of the provider's REST API
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Expected `iss` claim
    #[serde(default = "default_issuer")]
    pub issuer: String,
    /// Timeout for outbound provider calls in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            app_secret: SecretString::default(),
            verification_key: String::new(),
            api_url: default_api_url(),
            issuer: default_issuer(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl IdentityConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.app_id.is_empty() {
            errors.push("identity.app_id must be set".to_string());
        }
        if self.app_secret.is_empty() {
            errors.push("identity.app_secret must be set".to_string());
        }
        if self.verification_key.trim().is_empty() {
            errors.push("identity.verification_key must be set".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn default_api_url() -> Url {
    Url::parse(DEFAULT_API_URL).expect("default identity API URL is valid")
}

fn default_issuer() -> String {
    DEFAULT_ISSUER.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IdentityConfig::default();
        assert_eq!(config.api_url.as_str(), "https://auth.privy.io/");
        assert_eq!(config.issuer, "privy.io");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_config_validation_missing_fields() {
        let errors = IdentityConfig::default().validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_config_validation_valid() {
        let config = IdentityConfig {
            app_id: "app".to_string(),
            app_secret: "secret".into(),
            verification_key: "-----BEGIN PUBLIC KEY-----".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
