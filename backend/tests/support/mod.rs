//! Shared helpers for the contacts integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`; each
//! one pulls in only the helpers it needs.
#![expect(
    dead_code,
    reason = "each integration test crate uses a different subset of these helpers"
)]

pub mod cluster_skip;

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use serde_json::{Value, json};

use contacts::Trace;
use contacts::domain::ContactsService;
use contacts::inbound::http::configure;
use contacts::inbound::http::state::HttpState;
use contacts::outbound::memory::InMemoryContactRepository;

/// Full route configuration over a fresh in-memory store.
pub fn contacts_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let service = ContactsService::new(Arc::new(InMemoryContactRepository::new()));
    App::new()
        .app_data(web::Data::new(HttpState::from_service(Arc::new(service))))
        .wrap(Trace)
        .configure(configure)
}

/// JSON body for the contact the original test suite seeds.
pub fn john_doe() -> Value {
    json!({
        "name": "John Doe",
        "phone": "1234567890",
        "email": "john@example.com",
        "type": "Personal"
    })
}

/// JSON body for a second contact.
pub fn jane_doe() -> Value {
    json!({
        "name": "Jane Doe",
        "phone": "5559876543",
        "email": "jane@example.com",
        "type": "work"
    })
}
