//! Contacts JSON API handlers.
//!
//! ```text
//! GET  /api/contacts
//! GET  /api/contacts/{id}
//! POST /api/contacts      {"name":"Jane Doe","phone":"9876543210","email":"jane@example.com","type":"Personal"}
//! PUT  /api/contacts/{id} {"name":"Jane Smith",...}
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Contact, ContactDetails, ContactDraft, ContactId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::contact_validation_error;

/// Request body for creating or replacing a contact.
///
/// Every field is optional at the serde layer so that missing fields are
/// reported together with blank ones.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct ContactRequest {
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[schema(example = "9876543210")]
    pub phone: Option<String>,
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    #[serde(rename = "type")]
    #[schema(example = "Personal")]
    pub kind: Option<String>,
}

impl From<ContactRequest> for ContactDraft {
    fn from(value: ContactRequest) -> Self {
        Self {
            name: value.name,
            phone: value.phone,
            email: value.email,
            kind: value.kind,
        }
    }
}

/// JSON representation of a stored contact.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct ContactResponse {
    #[schema(example = 1)]
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<Contact> for ContactResponse {
    fn from(value: Contact) -> Self {
        Self {
            id: value.id().get(),
            name: value.name().to_owned(),
            phone: value.phone().to_owned(),
            email: value.email().to_owned(),
            kind: value.kind().to_owned(),
        }
    }
}

fn parse_body(body: ContactRequest) -> Result<ContactDetails, Error> {
    ContactDetails::try_from(ContactDraft::from(body)).map_err(|errors| contact_validation_error(&errors))
}

/// List every contact in insertion order.
#[utoipa::path(
    get,
    path = "/api/contacts",
    responses(
        (status = 200, description = "All contacts", body = [ContactResponse]),
        (status = 503, description = "Storage unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["contacts"],
    operation_id = "listContacts"
)]
#[get("/contacts")]
pub async fn list_contacts(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ContactResponse>>> {
    let contacts = state.contacts.list_contacts().await?;
    Ok(web::Json(
        contacts.into_iter().map(ContactResponse::from).collect(),
    ))
}

/// Fetch one contact by identifier.
#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    params(("id" = i32, Path, description = "Contact identifier")),
    responses(
        (status = 200, description = "The contact", body = ContactResponse),
        (status = 404, description = "Unknown contact", body = Error),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["contacts"],
    operation_id = "getContact"
)]
#[get("/contacts/{id}")]
pub async fn get_contact(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<ContactResponse>> {
    let id = ContactId::new(path.into_inner());
    let contact = state.contacts.fetch_contact(id).await?;
    Ok(web::Json(contact.into()))
}

/// Create a contact.
///
/// Responds `201 Created` with a `Location` header pointing at the new
/// resource. Missing or blank fields yield 400 and nothing is stored.
#[utoipa::path(
    post,
    path = "/api/contacts",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Contact created", body = ContactResponse,
            headers(("Location" = String, description = "URL of the new contact"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["contacts"],
    operation_id = "createContact"
)]
#[post("/contacts")]
pub async fn create_contact(
    state: web::Data<HttpState>,
    payload: web::Json<ContactRequest>,
) -> ApiResult<HttpResponse> {
    let details = parse_body(payload.into_inner())?;
    let contact = state.contacts_command.create_contact(details).await?;
    let location = format!("/api/contacts/{}", contact.id());
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(ContactResponse::from(contact)))
}

/// Replace every field of an existing contact.
#[utoipa::path(
    put,
    path = "/api/contacts/{id}",
    params(("id" = i32, Path, description = "Contact identifier")),
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Contact updated", body = ContactResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Unknown contact", body = Error),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["contacts"],
    operation_id = "updateContact"
)]
#[put("/contacts/{id}")]
pub async fn update_contact(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<ContactRequest>,
) -> ApiResult<web::Json<ContactResponse>> {
    let id = ContactId::new(path.into_inner());
    let details = parse_body(payload.into_inner())?;
    let contact = state.contacts_command.update_contact(id, details).await?;
    Ok(web::Json(contact.into()))
}

#[cfg(test)]
#[path = "contacts_tests.rs"]
mod tests;
