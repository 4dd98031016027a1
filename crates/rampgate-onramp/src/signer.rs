//! HMAC-SHA256 URL signing
//!
//! The signature covers the URL's search component exactly as it will be
//! sent (`?` plus the encoded query), and is appended as the last parameter.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use rampgate_auth::SecretString;
use sha2::Sha256;
use url::Url;

use crate::error::{OnrampError, OnrampResult};

type HmacSha256 = Hmac<Sha256>;

/// Name of the integrity parameter
pub const SIGNATURE_PARAM: &str = "signature";

/// Signs outbound redirect URLs with a vendor secret
#[derive(Clone)]
pub struct UrlSigner {
    key: SecretString,
}

impl UrlSigner {
    pub fn new(key: SecretString) -> Self {
        Self { key }
    }

    fn mac(&self) -> OnrampResult<HmacSha256> {
        HmacSha256::new_from_slice(self.key.expose_secret().as_bytes())
            .map_err(|_| OnrampError::Internal("invalid HMAC key".to_string()))
    }

    /// HMAC-SHA256 of `message`, standard base64
    pub fn sign_message(&self, message: &str) -> OnrampResult<String> {
        let mut mac = self.mac()?;
        mac.update(message.as_bytes());
        Ok(STANDARD.encode(mac.finalize().into_bytes()))
    }

    /// Sign the current search component and append `signature`
    ///
    /// Must be the last mutation of `url`.
    pub fn sign_url(&self, url: &mut Url) -> OnrampResult<()> {
        let signature = self.sign_message(&search_component(url))?;
        url.query_pairs_mut().append_pair(SIGNATURE_PARAM, &signature);
        Ok(())
    }

    /// Check that `url` ends with a valid signature over everything before it
    pub fn verify_url(&self, url: &Url) -> bool {
        let Some((search, signature)) = split_signature(url) else {
            return false;
        };
        let Ok(signature) = STANDARD.decode(signature) else {
            return false;
        };
        let Ok(mut mac) = self.mac() else {
            return false;
        };
        mac.update(search.as_bytes());
        mac.verify_slice(&signature).is_ok()
    }
}

/// `?query`, or empty when the URL has no query
pub fn search_component(url: &Url) -> String {
    url.query().map(|q| format!("?{}", q)).unwrap_or_default()
}

/// Split a signed URL into the signed search prefix and the decoded
/// signature value. `None` unless `signature` is the final parameter.
pub fn split_signature(url: &Url) -> Option<(String, String)> {
    let query = url.query()?;
    let marker = format!("&{}=", SIGNATURE_PARAM);
    let index = query.rfind(&marker)?;

    let prefix = &query[..index];
    let (_, signature) = url::form_urlencoded::parse(query[index + 1..].as_bytes()).next()?;

    Some((format!("?{}", prefix), signature.into_owned()))
}
