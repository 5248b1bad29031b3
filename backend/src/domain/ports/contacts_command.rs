//! Driving port for contact mutations.

use async_trait::async_trait;

use crate::domain::{Contact, ContactDetails, ContactId, Error};

/// Domain use-case port for creating and updating contacts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactsCommand: Send + Sync {
    /// Persist a new contact.
    async fn create_contact(&self, details: ContactDetails) -> Result<Contact, Error>;

    /// Overwrite every business field of an existing contact.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when the identifier
    /// is unknown; nothing is written in that case.
    async fn update_contact(&self, id: ContactId, details: ContactDetails)
    -> Result<Contact, Error>;
}
