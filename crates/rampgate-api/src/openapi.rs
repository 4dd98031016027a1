//! OpenAPI Documentation

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::dto;
use crate::error::ErrorResponse;
use crate::handlers;

/// Rampgate API Documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rampgate API",
        description = "Authenticated fiat on-ramp URLs and account deletion."
    ),
    paths(
        handlers::health::health_check,
        handlers::onramp::create_onramp_url,
        handlers::users::delete_current_user,
    ),
    components(
        schemas(
            ErrorResponse,
            dto::HealthResponse,
            dto::OnrampUrlRequest,
            dto::OnrampUrlResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "On-ramp", description = "Fiat-to-crypto funding URLs"),
        (name = "Account", description = "Account lifecycle")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Security scheme modifier
pub struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = &mut openapi.components {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_generation() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Rampgate API");
        assert!(spec.paths.paths.contains_key("/api/onramp"));
        assert!(spec.paths.paths.contains_key("/api/users/me"));
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let json = ApiDoc::openapi().to_json().unwrap();
        assert!(json.contains("\"bearer\""));
        assert!(json.contains("OnrampUrlRequest"));
    }
}
