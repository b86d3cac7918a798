// OpenAPI documentation generation
//
// Generated at compile time with utoipa so the document follows the handlers.

use utoipa::OpenApi;

use crate::common::{ContactResponse, HealthResponse, SendEmailRequest};

/// OpenAPI documentation for the contact relay
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Folio Contact Relay",
        description = "Relays portfolio contact form submissions by email",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    ),
    paths(
        crate::endpoints::contact::send_email,
        crate::endpoints::health::health_check,
    ),
    components(
        schemas(
            SendEmailRequest,
            ContactResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "contact", description = "Contact form relay"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/send-email"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
