//! Client-token on-ramp
//!
//! Exchanges the vendor client credentials for a short-lived client token
//! and embeds it in the widget URL. The token is the only integrity
//! parameter; nothing is signed locally.

use serde::Deserialize;
use url::Url;

use crate::config::SardineConfig;
use crate::error::{OnrampError, OnrampResult};
use crate::request::OnrampRequest;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClientTokenResponse {
    client_token: String,
}

/// Token-exchange URL builder
#[derive(Clone)]
pub struct SardineClient {
    config: SardineConfig,
    http: reqwest::Client,
}

impl SardineClient {
    pub fn new(config: SardineConfig) -> OnrampResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| OnrampError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    /// Obtain a one-time client token
    ///
    /// Single attempt. Every failure maps to `UpstreamUnavailable`.
    pub async fn fetch_client_token(&self) -> OnrampResult<String> {
        let response = self
            .http
            .post(self.config.auth_url.clone())
            .basic_auth(
                &self.config.client_id,
                Some(self.config.client_secret.expose_secret()),
            )
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "On-ramp token exchange request failed");
                OnrampError::UpstreamUnavailable
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "On-ramp token exchange rejected");
            return Err(OnrampError::UpstreamUnavailable);
        }

        let body: ClientTokenResponse = response.json().await.map_err(|_| {
            tracing::warn!("On-ramp token exchange returned no client token");
            OnrampError::UpstreamUnavailable
        })?;

        Ok(body.client_token)
    }

    /// Build the funding URL around a fresh client token
    pub async fn build_url(&self, request: &OnrampRequest) -> OnrampResult<Url> {
        let client_token = self.fetch_client_token().await?;

        let mut url = self.config.base_url.clone();
        url.query_pairs_mut()
            .append_pair("client_token", &client_token)
            .append_pair("address", request.wallet_address.as_str())
            .append_pair("fixed_asset_type", &self.config.fixed_asset_type);

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{basic_auth, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ADDRESS: &str = "0xAbC0000000000000000000000000000000000123";

    fn client(server: &MockServer) -> SardineClient {
        SardineClient::new(SardineConfig {
            auth_url: Url::parse(&format!("{}/v1/auth/client-tokens", server.uri())).unwrap(),
            base_url: Url::parse("https://crypto.sardine.test/").unwrap(),
            client_id: "client-id".to_string(),
            client_secret: "client-secret".into(),
            ..Default::default()
        })
        .unwrap()
    }

    fn request() -> OnrampRequest {
        OnrampRequest::new(Some(ADDRESS), None, None).unwrap()
    }

    #[tokio::test]
    async fn test_build_url_with_client_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/auth/client-tokens"))
            .and(basic_auth("client-id", "client-secret"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "clientToken": "ct_123" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let url = client(&server).build_url(&request()).await.unwrap();
        assert_eq!(
            url.as_str(),
            format!(
                "https://crypto.sardine.test/?client_token=ct_123&address={}&fixed_asset_type=ETH",
                ADDRESS
            )
        );
    }

    #[tokio::test]
    async fn test_non_success_is_upstream_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;

        let result = client(&server).build_url(&request()).await;
        assert!(matches!(result, Err(OnrampError::UpstreamUnavailable)));
    }

    #[tokio::test]
    async fn test_missing_client_token_is_upstream_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "clientToken": 42 })),
            )
            .mount(&server)
            .await;

        let result = client(&server).fetch_client_token().await;
        assert!(matches!(result, Err(OnrampError::UpstreamUnavailable)));
    }

    #[tokio::test]
    async fn test_unreachable_vendor_is_upstream_unavailable() {
        let server = MockServer::start().await;
        let sardine = client(&server);
        drop(server);

        let result = sardine.fetch_client_token().await;
        assert!(matches!(result, Err(OnrampError::UpstreamUnavailable)));
    }
}
