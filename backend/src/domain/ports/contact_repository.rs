//! Driven port for contact persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Contact, ContactDetails, ContactId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by contact repository adapters.
    pub enum ContactRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "contact repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "contact repository query failed: {message}",
    }
}

/// Storage contract for contact records.
///
/// Implementations assign identifiers on insert and return contacts from
/// [`ContactRepository::list`] in insertion order. An unknown identifier is
/// reported as `Ok(None)`, never as an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Insert a new record and return it with its generated identifier.
    async fn create(&self, details: &ContactDetails) -> Result<Contact, ContactRepositoryError>;

    /// Fetch a contact by identifier.
    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, ContactRepositoryError>;

    /// Fetch every contact in insertion order.
    async fn list(&self) -> Result<Vec<Contact>, ContactRepositoryError>;

    /// Overwrite all business fields of an existing contact.
    ///
    /// Returns `Ok(None)` when no contact has the given identifier.
    async fn update(
        &self,
        id: ContactId,
        details: &ContactDetails,
    ) -> Result<Option<Contact>, ContactRepositoryError>;
}
