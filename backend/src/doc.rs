//! OpenAPI documentation for the JSON API and health probes.
//!
//! The HTML pages are not described; they are meant for browsers, not for
//! generated clients. The document is served at `/api-docs/openapi.json` and
//! printed by the `openapi-dump` binary.

use actix_web::{HttpResponse, get};
use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::contacts::{ContactRequest, ContactResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contacts API",
        description = "JSON interface for listing, creating and updating contacts."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::contacts::list_contacts,
        crate::inbound::http::contacts::get_contact,
        crate::inbound::http::contacts::create_contact,
        crate::inbound::http::contacts::update_contact,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ContactRequest, ContactResponse, Error, ErrorCode)),
    tags(
        (name = "contacts", description = "Contact records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON.
#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
