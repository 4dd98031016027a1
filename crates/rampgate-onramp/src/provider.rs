//! Vendor dispatch
//!
//! One [`OnrampProvider`] is built at startup from [`OnrampConfig`] and
//! shared by every request.

use std::fmt;

use rampgate_auth::AuthenticatedCaller;
use url::Url;

use crate::config::OnrampConfig;
use crate::error::OnrampResult;
use crate::moonpay::MoonpaySigner;
use crate::poko::PokoWidget;
use crate::request::OnrampRequest;
use crate::sardine::SardineClient;

/// Vendor label used in logs and metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Moonpay,
    Sardine,
    Poko,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Moonpay => "moonpay",
            Self::Sardine => "sardine",
            Self::Poko => "poko",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active on-ramp vendor
#[derive(Clone)]
pub enum OnrampProvider {
    Moonpay(MoonpaySigner),
    Sardine(SardineClient),
    Poko(PokoWidget),
}

impl OnrampProvider {
    pub fn from_config(config: &OnrampConfig) -> OnrampResult<Self> {
        Ok(match config {
            OnrampConfig::Moonpay(config) => Self::Moonpay(MoonpaySigner::new(config.clone())),
            OnrampConfig::Sardine(config) => Self::Sardine(SardineClient::new(config.clone())?),
            OnrampConfig::Poko(config) => Self::Poko(PokoWidget::new(config.clone())?),
        })
    }

    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Moonpay(_) => ProviderKind::Moonpay,
            Self::Sardine(_) => ProviderKind::Sardine,
            Self::Poko(_) => ProviderKind::Poko,
        }
    }

    /// Produce a funding URL for an already-validated request
    pub async fn build_url(
        &self,
        caller: &AuthenticatedCaller,
        request: &OnrampRequest,
    ) -> OnrampResult<Url> {
        let url = match self {
            Self::Moonpay(moonpay) => moonpay.build_url(request)?,
            Self::Sardine(sardine) => sardine.build_url(request).await?,
            Self::Poko(poko) => poko.build_url(caller, request),
        };

        tracing::debug!(
            provider = %self.kind(),
            user_id = %caller.user_id,
            "Issued on-ramp URL"
        );

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MoonpayConfig, PokoConfig};
    use crate::error::OnrampError;
    use rampgate_auth::VerifiedClaims;

    fn caller() -> AuthenticatedCaller {
        AuthenticatedCaller::from_claims(VerifiedClaims {
            app_id: "app".to_string(),
            issuer: "privy.io".to_string(),
            issued_at: 0,
            expiration: 0,
            session_id: Some("session".to_string()),
            user_id: "did:privy:bob".to_string(),
        })
    }

    fn request(redirect: Option<&str>) -> OnrampRequest {
        OnrampRequest::new(
            Some("0x00000000000000000000000000000000000000aa"),
            None,
            redirect,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_moonpay_dispatch() {
        let provider = OnrampProvider::from_config(&OnrampConfig::Moonpay(MoonpayConfig {
            secret_key: "sk".into(),
            ..Default::default()
        }))
        .unwrap();
        assert_eq!(provider.kind(), ProviderKind::Moonpay);

        let url = provider
            .build_url(&caller(), &request(Some("https://app/home")))
            .await
            .unwrap();
        assert!(url.as_str().starts_with("https://buy-sandbox.moonpay.com/?walletAddress="));

        let err = provider.build_url(&caller(), &request(None)).await.unwrap_err();
        assert!(matches!(err, OnrampError::MissingRedirect));
    }

    #[tokio::test]
    async fn test_poko_dispatch_ignores_redirect() {
        let provider = OnrampProvider::from_config(&OnrampConfig::Poko(PokoConfig {
            domain: "widget.poko.test".to_string(),
            api_key: "pk".to_string(),
            ..Default::default()
        }))
        .unwrap();
        assert_eq!(provider.kind().to_string(), "poko");

        let url = provider.build_url(&caller(), &request(None)).await.unwrap();
        assert!(url.as_str().contains("userId=did%3Aprivy%3Abob"));
    }
}
