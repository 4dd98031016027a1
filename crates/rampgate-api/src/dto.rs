//! Request and response bodies

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Body of `POST /api/onramp`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OnrampUrlRequest {
    /// EVM wallet address to fund
    #[schema(example = "0xAbC0000000000000000000000000000000000123")]
    pub address: Option<String>,
    /// Pre-fills vendor KYC
    pub email: Option<String>,
    /// Where the vendor sends the user when done
    pub redirect_url: Option<String>,
}

impl OnrampUrlRequest {
    /// Parse a body without ever rejecting it
    ///
    /// Anything that is not a JSON object yields an empty request, and
    /// non-string fields count as absent, so bad input surfaces as a
    /// validation failure rather than a framework parse error.
    pub fn from_json_lenient(bytes: &[u8]) -> Self {
        let value: Value = serde_json::from_slice(bytes).unwrap_or(Value::Null);
        let field = |name: &str| value.get(name).and_then(Value::as_str).map(str::to_string);

        Self {
            address: field("address"),
            email: field("email"),
            redirect_url: field("redirectUrl"),
        }
    }
}

/// Body of a successful `POST /api/onramp`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OnrampUrlResponse {
    /// Fully-qualified vendor URL
    pub url: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Milliseconds since epoch
    pub timestamp: i64,
    /// Active on-ramp vendor
    pub provider: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_parse() {
        let body = OnrampUrlRequest::from_json_lenient(
            br#"{"address":"0xabc","email":"a@b.com","redirectUrl":"https://app/home"}"#,
        );
        assert_eq!(body.address.as_deref(), Some("0xabc"));
        assert_eq!(body.email.as_deref(), Some("a@b.com"));
        assert_eq!(body.redirect_url.as_deref(), Some("https://app/home"));
    }

    #[test]
    fn test_lenient_parse_non_string_fields() {
        let body = OnrampUrlRequest::from_json_lenient(br#"{"address":42,"email":null}"#);
        assert_eq!(body, OnrampUrlRequest::default());
    }

    #[test]
    fn test_lenient_parse_garbage() {
        assert_eq!(OnrampUrlRequest::from_json_lenient(b"not json"), OnrampUrlRequest::default());
        assert_eq!(OnrampUrlRequest::from_json_lenient(b"[1,2]"), OnrampUrlRequest::default());
        assert_eq!(OnrampUrlRequest::from_json_lenient(b""), OnrampUrlRequest::default());
    }
}
