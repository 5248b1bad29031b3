//! Contact domain service.
//!
//! Implements the contact driving ports over any [`ContactRepository`],
//! turning "no such row" into not-found errors and persistence failures into
//! service-unavailable or internal errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{
    ContactRepository, ContactRepositoryError, ContactsCommand, ContactsQuery,
};
use crate::domain::{Contact, ContactDetails, ContactId, Error};

fn map_repository_error(error: ContactRepositoryError) -> Error {
    error!(%error, "contact repository failure");
    match error {
        ContactRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("contact repository unavailable: {message}"))
        }
        ContactRepositoryError::Query { message } => {
            Error::internal(format!("contact repository error: {message}"))
        }
    }
}

fn contact_not_found(id: ContactId) -> Error {
    Error::not_found(format!("contact {id} not found"))
}

/// Contact service implementing both contact driving ports.
#[derive(Clone)]
pub struct ContactsService<R> {
    contact_repo: Arc<R>,
}

impl<R> ContactsService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(contact_repo: Arc<R>) -> Self {
        Self { contact_repo }
    }
}

#[async_trait]
impl<R> ContactsQuery for ContactsService<R>
where
    R: ContactRepository,
{
    async fn list_contacts(&self) -> Result<Vec<Contact>, Error> {
        self.contact_repo
            .list()
            .await
            .map_err(map_repository_error)
    }

    async fn fetch_contact(&self, id: ContactId) -> Result<Contact, Error> {
        self.contact_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| contact_not_found(id))
    }
}

#[async_trait]
impl<R> ContactsCommand for ContactsService<R>
where
    R: ContactRepository,
{
    async fn create_contact(&self, details: ContactDetails) -> Result<Contact, Error> {
        let contact = self
            .contact_repo
            .create(&details)
            .await
            .map_err(map_repository_error)?;
        info!(contact_id = %contact.id(), "contact created");
        Ok(contact)
    }

    async fn update_contact(
        &self,
        id: ContactId,
        details: ContactDetails,
    ) -> Result<Contact, Error> {
        let contact = self
            .contact_repo
            .update(id, &details)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| contact_not_found(id))?;
        info!(contact_id = %id, "contact updated");
        Ok(contact)
    }
}

#[cfg(test)]
#[path = "contacts_service_tests.rs"]
mod tests;
