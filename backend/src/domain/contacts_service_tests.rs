//! Tests for the contact service.

use std::sync::Arc;

use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockContactRepository;

fn make_service(repo: MockContactRepository) -> ContactsService<MockContactRepository> {
    ContactsService::new(Arc::new(repo))
}

#[fixture]
fn details() -> ContactDetails {
    ContactDetails::try_new("John Doe", "1234567890", "john@example.com", "Personal")
        .expect("fixture details are valid")
}

#[rstest]
#[tokio::test]
async fn create_returns_repository_contact(details: ContactDetails) {
    let stored = Contact::new(ContactId::new(1), details.clone());
    let expected = stored.clone();
    let mut repo = MockContactRepository::new();
    repo.expect_create()
        .with(eq(details.clone()))
        .times(1)
        .return_once(move |_| Ok(stored));

    let contact = make_service(repo)
        .create_contact(details)
        .await
        .expect("create succeeds");

    assert_eq!(contact, expected);
}

#[rstest]
#[tokio::test]
async fn fetch_maps_missing_contact_to_not_found() {
    let mut repo = MockContactRepository::new();
    repo.expect_find_by_id()
        .with(eq(ContactId::new(999)))
        .times(1)
        .return_once(|_| Ok(None));

    let err = make_service(repo)
        .fetch_contact(ContactId::new(999))
        .await
        .expect_err("contact is missing");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "contact 999 not found");
}

#[rstest]
#[tokio::test]
async fn list_preserves_repository_order(details: ContactDetails) {
    let jane = ContactDetails::try_new("Jane Doe", "5559876543", "jane@example.com", "work")
        .expect("valid details");
    let contacts = vec![
        Contact::new(ContactId::new(1), details),
        Contact::new(ContactId::new(2), jane),
    ];
    let expected = contacts.clone();
    let mut repo = MockContactRepository::new();
    repo.expect_list().times(1).return_once(move || Ok(contacts));

    let listed = make_service(repo)
        .list_contacts()
        .await
        .expect("list succeeds");

    assert_eq!(listed, expected);
}

#[rstest]
#[tokio::test]
async fn update_of_unknown_contact_is_not_found(details: ContactDetails) {
    let mut repo = MockContactRepository::new();
    repo.expect_update()
        .with(eq(ContactId::new(42)), eq(details.clone()))
        .times(1)
        .return_once(|_, _| Ok(None));

    let err = make_service(repo)
        .update_contact(ContactId::new(42), details)
        .await
        .expect_err("contact is missing");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn update_returns_rewritten_contact(details: ContactDetails) {
    let renamed = ContactDetails::try_new("John Smith", "1234567890", "john@example.com", "Personal")
        .expect("valid details");
    let stored = Contact::new(ContactId::new(3), renamed.clone());
    let mut repo = MockContactRepository::new();
    repo.expect_update()
        .times(1)
        .return_once(move |_, _| Ok(Some(stored)));

    let contact = make_service(repo)
        .update_contact(ContactId::new(3), renamed)
        .await
        .expect("update succeeds");

    assert_eq!(contact.name(), "John Smith");
    assert_eq!(contact.phone(), details.phone());
}

#[rstest]
#[case(ContactRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(ContactRepositoryError::query("syntax error"), ErrorCode::InternalError)]
#[tokio::test]
async fn repository_failures_map_to_domain_errors(
    #[case] failure: ContactRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut repo = MockContactRepository::new();
    repo.expect_list().times(1).return_once(move || Err(failure));

    let err = make_service(repo)
        .list_contacts()
        .await
        .expect_err("repository fails");

    assert_eq!(err.code(), expected);
}
