//! Signed redirect on-ramp
//!
//! Builds the vendor widget URL server-side and signs its query with the
//! vendor secret so the vendor can trust the parameters were not altered.

use url::Url;

use crate::config::MoonpayConfig;
use crate::error::{OnrampError, OnrampResult};
use crate::request::OnrampRequest;
use crate::signer::UrlSigner;

/// Signed-redirect URL builder
#[derive(Clone)]
pub struct MoonpaySigner {
    config: MoonpayConfig,
    signer: UrlSigner,
}

impl MoonpaySigner {
    pub fn new(config: MoonpayConfig) -> Self {
        let signer = UrlSigner::new(config.secret_key.clone());
        Self { config, signer }
    }

    /// Build and sign the funding URL
    ///
    /// Parameter order: `walletAddress`, `email`, `redirectURL`,
    /// `currencyCode`, `theme`, then `signature` last.
    pub fn build_url(&self, request: &OnrampRequest) -> OnrampResult<Url> {
        if self.config.require_redirect_url && request.redirect_url.is_none() {
            return Err(OnrampError::MissingRedirect);
        }

        let mut url = self.config.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("walletAddress", request.wallet_address.as_str());
            if let Some(email) = &request.email {
                query.append_pair("email", email);
            }
            if let Some(redirect_url) = &request.redirect_url {
                query.append_pair("redirectURL", redirect_url);
            }
            query.append_pair("currencyCode", &self.config.currency_code);
            query.append_pair("theme", &self.config.theme);
        }

        self.signer.sign_url(&mut url)?;
        Ok(url)
    }
}
