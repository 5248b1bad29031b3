//! HTTP inbound adapter: HTML pages, the JSON API and health probes.

pub mod contacts;
pub mod error;
pub mod forms;
pub mod health;
pub mod pages;
pub mod render;
pub mod state;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register the page and JSON API routes.
///
/// Callers supply `web::Data<HttpState>`; health probes are registered
/// separately because they depend on server lifecycle state.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use actix_web::{App, web};
/// use contacts::domain::ContactsService;
/// use contacts::inbound::http::{configure, state::HttpState};
/// use contacts::outbound::memory::InMemoryContactRepository;
///
/// let service = ContactsService::new(Arc::new(InMemoryContactRepository::new()));
/// let state = HttpState::from_service(Arc::new(service));
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(pages::page_path_error_handler))
        .service(pages::index)
        .service(pages::add_contact)
        .service(pages::edit_contact)
        .service(pages::update_contact)
        .service(
            web::scope("/api")
                .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
                .service(contacts::list_contacts)
                .service(contacts::get_contact)
                .service(contacts::create_contact)
                .service(contacts::update_contact),
        );
}
