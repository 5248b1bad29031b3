//! Builders for the HTTP state from the configured storage backend.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use contacts::domain::ContactsService;
use contacts::inbound::http::state::HttpState;
use contacts::outbound::memory::InMemoryContactRepository;
use contacts::outbound::persistence::{DbPool, DieselContactRepository};

/// Wire the contact service over PostgreSQL when a pool is present, otherwise
/// over process memory.
pub(crate) fn build_http_state(db_pool: Option<&DbPool>) -> web::Data<HttpState> {
    let state = match db_pool {
        Some(pool) => {
            info!("contacts stored in PostgreSQL");
            let repo = Arc::new(DieselContactRepository::new(pool.clone()));
            HttpState::from_service(Arc::new(ContactsService::new(repo)))
        }
        None => {
            warn!("no database configured; contacts are kept in memory and lost on restart");
            let repo = Arc::new(InMemoryContactRepository::new());
            HttpState::from_service(Arc::new(ContactsService::new(repo)))
        }
    };
    web::Data::new(state)
}
