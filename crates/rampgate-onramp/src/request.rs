//! Validated on-ramp request

use std::fmt;

use crate::error::{OnrampError, OnrampResult};

/// An EVM wallet address: `0x` followed by 40 hex digits
///
/// Case is preserved. EIP-55 checksums are not enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn parse(raw: &str) -> OnrampResult<Self> {
        let hex = raw
            .strip_prefix("0x")
            .or_else(|| raw.strip_prefix("0X"))
            .ok_or(OnrampError::BadAddress)?;

        if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(OnrampError::BadAddress);
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Inputs for building a funding URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnrampRequest {
    pub wallet_address: WalletAddress,
    /// Pre-fills KYC; omitted from the URL when absent
    pub email: Option<String>,
    /// Where the vendor sends the user afterwards
    pub redirect_url: Option<String>,
}

impl OnrampRequest {
    /// Validate raw client fields
    ///
    /// Runs before any vendor call. Empty strings count as absent.
    pub fn new(
        address: Option<&str>,
        email: Option<&str>,
        redirect_url: Option<&str>,
    ) -> OnrampResult<Self> {
        let wallet_address = WalletAddress::parse(address.ok_or(OnrampError::BadAddress)?)?;

        Ok(Self {
            wallet_address,
            email: non_empty(email),
            redirect_url: non_empty(redirect_url),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0xAbC0000000000000000000000000000000000123";

    #[test]
    fn test_wallet_address_valid() {
        let address = WalletAddress::parse(ADDRESS).unwrap();
        assert_eq!(address.as_str(), ADDRESS);
        assert_eq!(address.to_string(), ADDRESS);
    }

    #[test]
    fn test_wallet_address_invalid() {
        for raw in [
            "",
            "0x",
            "AbC0000000000000000000000000000000000123",
            "0xAbC000000000000000000000000000000000012",
            "0xAbC00000000000000000000000000000000001234",
            "0xZZZ0000000000000000000000000000000000123",
            "not an address",
        ] {
            assert!(
                matches!(WalletAddress::parse(raw), Err(OnrampError::BadAddress)),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_request_requires_address() {
        let result = OnrampRequest::new(None, Some("a@b.com"), Some("https://app/home"));
        assert!(matches!(result, Err(OnrampError::BadAddress)));
    }

    #[test]
    fn test_request_empty_optionals_are_absent() {
        let request = OnrampRequest::new(Some(ADDRESS), Some(""), Some("")).unwrap();
        assert_eq!(request.email, None);
        assert_eq!(request.redirect_url, None);
    }

    #[test]
    fn test_request_keeps_optionals() {
        let request =
            OnrampRequest::new(Some(ADDRESS), Some("a@b.com"), Some("https://app/home")).unwrap();
        assert_eq!(request.email.as_deref(), Some("a@b.com"));
        assert_eq!(request.redirect_url.as_deref(), Some("https://app/home"));
    }
}
