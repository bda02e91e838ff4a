//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Document header; paths come from the domain crates.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Event Management API",
        version = "0.1.0",
        description = "Events, attendees, venues, bookings and their media, stored in MongoDB"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(crate::api::health::readiness_check),
    tags(
        (name = "Health", description = "Liveness and readiness")
    )
)]
struct ApiInfo;

/// Combined OpenAPI documentation for all APIs
///
/// Routes are mounted at the root, so the domain documents are merged rather
/// than nested.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = ApiInfo::openapi();
        doc.merge(domain_resources::ApiDoc::openapi());
        doc.merge(domain_media::ApiDoc::openapi());
        doc
    }
}
