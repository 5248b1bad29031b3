//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the contact driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ContactsCommand, ContactsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub contacts: Arc<dyn ContactsQuery>,
    pub contacts_command: Arc<dyn ContactsCommand>,
}

impl HttpState {
    /// Construct state from individual port implementations.
    pub fn new(
        contacts: Arc<dyn ContactsQuery>,
        contacts_command: Arc<dyn ContactsCommand>,
    ) -> Self {
        Self {
            contacts,
            contacts_command,
        }
    }

    /// Construct state from one service implementing both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use contacts::domain::ContactsService;
    /// use contacts::inbound::http::state::HttpState;
    /// use contacts::outbound::memory::InMemoryContactRepository;
    ///
    /// let service = ContactsService::new(Arc::new(InMemoryContactRepository::new()));
    /// let _state = HttpState::from_service(Arc::new(service));
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: ContactsQuery + ContactsCommand + 'static,
    {
        Self {
            contacts: service.clone(),
            contacts_command: service,
        }
    }
}
