//! In-process contact storage.
//!
//! Used when no database URL is configured and by the HTTP integration tests.
//! Contents are lost on restart. Identifiers start at 1 and are never reused.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{ContactRepository, ContactRepositoryError};
use crate::domain::{Contact, ContactDetails, ContactId};

#[derive(Debug)]
struct Store {
    next_id: i32,
    contacts: Vec<Contact>,
}

/// `ContactRepository` backed by a vector guarded by an async lock.
///
/// Contacts are kept in insertion order, which is also identifier order.
#[derive(Debug)]
pub struct InMemoryContactRepository {
    store: RwLock<Store>,
}

impl Default for InMemoryContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                next_id: 1,
                contacts: Vec::new(),
            }),
        }
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create(&self, details: &ContactDetails) -> Result<Contact, ContactRepositoryError> {
        let mut store = self.store.write().await;
        let id = store.next_id;
        store.next_id = id
            .checked_add(1)
            .ok_or_else(|| ContactRepositoryError::query("contact identifiers exhausted"))?;
        let contact = Contact::new(ContactId::new(id), details.clone());
        store.contacts.push(contact.clone());
        Ok(contact)
    }

    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, ContactRepositoryError> {
        let store = self.store.read().await;
        Ok(store
            .contacts
            .iter()
            .find(|contact| contact.id() == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Contact>, ContactRepositoryError> {
        Ok(self.store.read().await.contacts.clone())
    }

    async fn update(
        &self,
        id: ContactId,
        details: &ContactDetails,
    ) -> Result<Option<Contact>, ContactRepositoryError> {
        let mut store = self.store.write().await;
        let Some(slot) = store.contacts.iter_mut().find(|contact| contact.id() == id) else {
            return Ok(None);
        };
        *slot = slot.clone().with_details(details.clone());
        Ok(Some(slot.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn john() -> ContactDetails {
        ContactDetails::try_new("John Doe", "1234567890", "john@example.com", "Personal")
            .expect("valid details")
    }

    #[fixture]
    fn jane() -> ContactDetails {
        ContactDetails::try_new("Jane Doe", "9876543210", "jane@example.com", "Work")
            .expect("valid details")
    }

    #[rstest]
    #[tokio::test]
    async fn identifiers_start_at_one_and_increase(john: ContactDetails, jane: ContactDetails) {
        let repo = InMemoryContactRepository::new();

        let first = repo.create(&john).await.expect("create");
        let second = repo.create(&jane).await.expect("create");

        assert_eq!(first.id(), ContactId::new(1));
        assert_eq!(second.id(), ContactId::new(2));
    }

    #[rstest]
    #[tokio::test]
    async fn list_is_in_insertion_order(john: ContactDetails, jane: ContactDetails) {
        let repo = InMemoryContactRepository::new();
        repo.create(&john).await.expect("create");
        repo.create(&jane).await.expect("create");

        let names: Vec<String> = repo
            .list()
            .await
            .expect("list")
            .iter()
            .map(|contact| contact.name().to_owned())
            .collect();

        assert_eq!(names, vec!["John Doe", "Jane Doe"]);
    }

    #[rstest]
    #[tokio::test]
    async fn find_returns_none_for_unknown_id() {
        let repo = InMemoryContactRepository::new();

        let found = repo.find_by_id(ContactId::new(999)).await.expect("find");

        assert!(found.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn update_rewrites_fields_in_place(john: ContactDetails, jane: ContactDetails) {
        let repo = InMemoryContactRepository::new();
        let created = repo.create(&john).await.expect("create");

        let updated = repo
            .update(created.id(), &jane)
            .await
            .expect("update")
            .expect("contact exists");

        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.details(), &jane);
        let stored = repo
            .find_by_id(created.id())
            .await
            .expect("find")
            .expect("contact exists");
        assert_eq!(stored, updated);
    }

    #[rstest]
    #[tokio::test]
    async fn update_of_unknown_id_changes_nothing(john: ContactDetails) {
        let repo = InMemoryContactRepository::new();
        repo.create(&john).await.expect("create");

        let updated = repo.update(ContactId::new(7), &john).await.expect("update");

        assert!(updated.is_none());
        assert_eq!(repo.list().await.expect("list").len(), 1);
    }
}
