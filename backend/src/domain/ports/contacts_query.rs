//! Driving port for contact reads.
//!
//! Inbound adapters use this port to fetch contacts without importing
//! persistence concerns.

use async_trait::async_trait;

use crate::domain::{Contact, ContactId, Error};

/// Domain use-case port for reading contacts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactsQuery: Send + Sync {
    /// Return every contact in insertion order.
    async fn list_contacts(&self) -> Result<Vec<Contact>, Error>;

    /// Return a single contact, failing with [`crate::domain::ErrorCode::NotFound`]
    /// when the identifier is unknown.
    async fn fetch_contact(&self, id: ContactId) -> Result<Contact, Error>;
}
