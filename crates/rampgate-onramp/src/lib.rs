//! # Rampgate On-ramp
//!
//! Funding URLs for third-party fiat-to-crypto vendors.
//!
//! ## Vendors
//!
//! - **Moonpay**: the URL is built locally and signed with HMAC-SHA256 over
//!   its search component. The signature is always the final parameter.
//! - **Sardine**: a client token is fetched from the vendor on every request
//!   and embedded in the URL.
//! - **Poko**: an embedded widget opened with a publishable key.
//!
//! ## Flow
//!
//! ```text
//! raw body fields ──► OnrampRequest::new ──► OnrampProvider::build_url ──► Url
//!                     (412 on bad input)     (500 on vendor failure)
//! ```
//!
//! Input validation always completes before any vendor call.

pub mod config;
pub mod error;
pub mod moonpay;
pub mod poko;
pub mod provider;
pub mod request;
pub mod sardine;
pub mod signer;

pub use config::{MoonpayConfig, OnrampConfig, PokoConfig, SardineConfig};
pub use error::{OnrampError, OnrampResult};
pub use moonpay::MoonpaySigner;
pub use poko::PokoWidget;
pub use provider::{OnrampProvider, ProviderKind};
pub use request::{OnrampRequest, WalletAddress};
pub use sardine::SardineClient;
pub use signer::UrlSigner;
