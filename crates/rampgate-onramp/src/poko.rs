//! Embedded-widget on-ramp
//!
//! The widget is opened in a frame with a publishable API key, so the URL
//! carries no signature. The caller's user id ties the purchase to the
//! account.

use rampgate_auth::AuthenticatedCaller;
use url::Url;

use crate::config::PokoConfig;
use crate::error::{OnrampError, OnrampResult};
use crate::request::OnrampRequest;

#[derive(Clone)]
pub struct PokoWidget {
    config: PokoConfig,
    widget_url: Url,
}

impl PokoWidget {
    pub fn new(config: PokoConfig) -> OnrampResult<Self> {
        let widget_url = config
            .widget_url()
            .map_err(|e| OnrampError::Config(format!("invalid widget domain: {}", e)))?;
        Ok(Self { config, widget_url })
    }

    pub fn build_url(&self, caller: &AuthenticatedCaller, request: &OnrampRequest) -> Url {
        let mut url = self.widget_url.clone();
        url.query_pairs_mut()
            .append_pair("strictMode", if self.config.strict_mode { "true" } else { "false" })
            .append_pair("fiat", &self.config.fiat)
            .append_pair("crypto", &self.config.crypto)
            .append_pair("receiveWalletAddress", request.wallet_address.as_str())
            .append_pair("userId", &caller.user_id)
            .append_pair("apiKey", &self.config.api_key)
            .append_pair("fiatList", &self.config.fiat_list)
            .append_pair("cryptoList", &self.config.crypto_list);
        url
    }
}
