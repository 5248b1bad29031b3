//! PostgreSQL-backed `ContactRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{ContactRepository, ContactRepositoryError};
use crate::domain::{Contact, ContactDetails, ContactId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ContactRow, ContactUpdate, NewContactRow};
use super::pool::{DbPool, PoolError};
use super::schema::contacts;

/// Diesel-backed implementation of the `ContactRepository` port.
#[derive(Clone)]
pub struct DieselContactRepository {
    pool: DbPool,
}

impl DieselContactRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ContactRepositoryError {
    map_basic_pool_error(error, ContactRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ContactRepositoryError {
    map_basic_diesel_error(
        error,
        ContactRepositoryError::query,
        ContactRepositoryError::connection,
    )
}

/// Convert a stored row into a domain contact.
///
/// Rows written outside the application may violate the non-blank rule; those
/// are reported as query errors rather than served.
fn row_to_contact(row: ContactRow) -> Result<Contact, ContactRepositoryError> {
    let ContactRow {
        id,
        name,
        phone,
        email,
        contact_type,
    } = row;
    let details = ContactDetails::try_new(name, phone, email, contact_type).map_err(|err| {
        warn!(contact_id = id, error = %err, "stored contact failed validation");
        ContactRepositoryError::query(format!("stored contact {id} is invalid"))
    })?;
    Ok(Contact::new(ContactId::new(id), details))
}

#[async_trait]
impl ContactRepository for DieselContactRepository {
    async fn create(&self, details: &ContactDetails) -> Result<Contact, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(contacts::table)
            .values(NewContactRow::from(details))
            .returning(ContactRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_contact(row)
    }

    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = contacts::table
            .find(id.get())
            .select(ContactRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_contact).transpose()
    }

    async fn list(&self) -> Result<Vec<Contact>, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ContactRow> = contacts::table
            .order(contacts::id.asc())
            .select(ContactRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_contact).collect()
    }

    async fn update(
        &self,
        id: ContactId,
        details: &ContactDetails,
    ) -> Result<Option<Contact>, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::update(contacts::table.find(id.get()))
            .set(ContactUpdate::from(details))
            .returning(ContactRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_contact).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn row(name: &str) -> ContactRow {
        ContactRow {
            id: 4,
            name: name.to_owned(),
            phone: "1234567890".to_owned(),
            email: "john@example.com".to_owned(),
            contact_type: "Personal".to_owned(),
        }
    }

    #[rstest]
    fn row_maps_type_column_to_kind() {
        let contact = row_to_contact(row("John Doe")).expect("row is valid");

        assert_eq!(contact.id(), ContactId::new(4));
        assert_eq!(contact.kind(), "Personal");
    }

    #[rstest]
    fn blank_stored_row_is_a_query_error() {
        let err = row_to_contact(row("  ")).expect_err("blank name");

        assert_eq!(err, ContactRepositoryError::query("stored contact 4 is invalid"));
    }
}
