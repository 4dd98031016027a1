//! Request handlers

pub mod health;
pub mod onramp;
pub mod users;

use crate::error::ApiError;

/// Fallback for unknown paths and unsupported methods
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
