//! Secret string holder
//!
//! Long-lived credentials (identity app secret, vendor keys) are kept in a
//! [`SecretString`]. It never prints its contents and wipes its buffer on drop.

use serde::Deserialize;
use std::fmt;
use zeroize::Zeroize;

/// A credential that must never reach logs or responses
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw secret. Call sites should use it immediately.
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_and_display_are_redacted() {
        let secret = SecretString::new("sk_live_very_secret");
        assert_eq!(format!("{:?}", secret), "[REDACTED]");
        assert_eq!(secret.to_string(), "[REDACTED]");
        assert_eq!(secret.expose_secret(), "sk_live_very_secret");
    }

    #[test]
    fn test_redacted_inside_derived_debug() {
        #[derive(Debug)]
        struct Holder {
            #[allow(dead_code)]
            key: SecretString,
        }

        let holder = Holder { key: "hunter2".into() };
        let rendered = format!("{:?}", holder);
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_deserialize_transparent() {
        let secret: SecretString = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(secret.expose_secret(), "abc");
        assert!(!secret.is_empty());
        assert!(SecretString::default().is_empty());
    }
}
