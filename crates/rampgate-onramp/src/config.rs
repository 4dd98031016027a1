//! On-ramp vendor configuration
//!
//! Exactly one vendor is active per deployment. The `provider` tag selects
//! the variant; vendor secrets are held as [`SecretString`].

use rampgate_auth::SecretString;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Active on-ramp vendor and its settings
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "provider", rename_all = "snake_case")]
pub enum OnrampConfig {
    /// Self-signed redirect URL
    Moonpay(MoonpayConfig),
    /// Client token obtained from the vendor's auth endpoint
    Sardine(SardineConfig),
    /// Embedded widget with a publishable API key
    Poko(PokoConfig),
}

impl OnrampConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        match self {
            Self::Moonpay(config) => {
                if config.secret_key.is_empty() {
                    errors.push("onramp.secret_key must be set".to_string());
                }
                if config.currency_code.is_empty() {
                    errors.push("onramp.currency_code must not be empty".to_string());
                }
            }
            Self::Sardine(config) => {
                if config.client_id.is_empty() {
                    errors.push("onramp.client_id must be set".to_string());
                }
                if config.client_secret.is_empty() {
                    errors.push("onramp.client_secret must be set".to_string());
                }
            }
            Self::Poko(config) => {
                if config.domain.is_empty() {
                    errors.push("onramp.domain must be set".to_string());
                } else if config.widget_url().is_err() {
                    errors.push(format!("onramp.domain is not a valid host: {}", config.domain));
                }
                if config.api_key.is_empty() {
                    errors.push("onramp.api_key must be set".to_string());
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for OnrampConfig {
    fn default() -> Self {
        Self::Moonpay(MoonpayConfig::default())
    }
}

/// Signed-redirect vendor settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoonpayConfig {
    /// Widget base URL
    #[serde(default = "default_moonpay_base_url")]
    pub base_url: Url,
    /// HMAC key for URL signatures
    #[serde(default)]
    pub secret_key: SecretString,
    /// Reject requests without a redirect URL
    #[serde(default = "default_true")]
    pub require_redirect_url: bool,
    /// Asset to purchase
    #[serde(default = "default_currency_code")]
    pub currency_code: String,
    /// Widget theme hint
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for MoonpayConfig {
    fn default() -> Self {
        Self {
            base_url: default_moonpay_base_url(),
            secret_key: SecretString::default(),
            require_redirect_url: true,
            currency_code: default_currency_code(),
            theme: default_theme(),
        }
    }
}

/// Token-exchange vendor settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SardineConfig {
    /// Client-token endpoint
    #[serde(default = "default_sardine_auth_url")]
    pub auth_url: Url,
    /// Widget base URL
    #[serde(default = "default_sardine_base_url")]
    pub base_url: Url,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: SecretString,
    /// Asset the user is asked to buy
    #[serde(default = "default_fixed_asset_type")]
    pub fixed_asset_type: String,
    /// Timeout for the token exchange in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl Default for SardineConfig {
    fn default() -> Self {
        Self {
            auth_url: default_sardine_auth_url(),
            base_url: default_sardine_base_url(),
            client_id: String::new(),
            client_secret: SecretString::default(),
            fixed_asset_type: default_fixed_asset_type(),
            request_timeout_secs: default_request_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl SardineConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Embedded-widget vendor settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PokoConfig {
    /// Widget host, without scheme
    #[serde(default)]
    pub domain: String,
    /// Publishable API key
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_poko_fiat")]
    pub fiat: String,
    #[serde(default = "default_poko_fiat_list")]
    pub fiat_list: String,
    #[serde(default = "default_poko_crypto")]
    pub crypto: String,
    #[serde(default = "default_poko_crypto")]
    pub crypto_list: String,
    /// Lock the widget to the configured fiat/crypto pair
    #[serde(default = "default_true")]
    pub strict_mode: bool,
}

impl Default for PokoConfig {
    fn default() -> Self {
        Self {
            domain: String::new(),
            api_key: String::new(),
            fiat: default_poko_fiat(),
            fiat_list: default_poko_fiat_list(),
            crypto: default_poko_crypto(),
            crypto_list: default_poko_crypto(),
            strict_mode: true,
        }
    }
}

impl PokoConfig {
    /// `https://{domain}`
    pub fn widget_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&format!("https://{}", self.domain))
    }
}

// =============================================================================
// Default Functions
// =============================================================================

fn default_moonpay_base_url() -> Url {
    Url::parse("https://buy-sandbox.moonpay.com").expect("default Moonpay URL is valid")
}

fn default_sardine_auth_url() -> Url {
    Url::parse("https://api.sandbox.sardine.ai/v1/auth/client-tokens")
        .expect("default Sardine auth URL is valid")
}

fn default_sardine_base_url() -> Url {
    Url::parse("https://crypto.sandbox.sardine.ai/").expect("default Sardine URL is valid")
}

fn default_currency_code() -> String {
    "eth".to_string()
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_fixed_asset_type() -> String {
    "ETH".to_string()
}

fn default_poko_fiat() -> String {
    "USD".to_string()
}

fn default_poko_fiat_list() -> String {
    "usd".to_string()
}

fn default_poko_crypto() -> String {
    "ETH-ethereum".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_true() -> bool {
    true
}
