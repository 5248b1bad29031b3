//! Internal Diesel row structs for the contacts table.
//!
//! These types never leave the persistence layer.

use diesel::prelude::*;

use crate::domain::ContactDetails;

use super::schema::contacts;

/// Columns read back for a contact.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ContactRow {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub contact_type: String,
}

/// Insertable contact; the identifier comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contacts)]
pub(crate) struct NewContactRow<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub email: &'a str,
    pub contact_type: &'a str,
}

/// Full rewrite of a contact's business fields.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = contacts)]
pub(crate) struct ContactUpdate<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub email: &'a str,
    pub contact_type: &'a str,
}

impl<'a> From<&'a ContactDetails> for NewContactRow<'a> {
    fn from(details: &'a ContactDetails) -> Self {
        Self {
            name: details.name(),
            phone: details.phone(),
            email: details.email(),
            contact_type: details.kind(),
        }
    }
}

impl<'a> From<&'a ContactDetails> for ContactUpdate<'a> {
    fn from(details: &'a ContactDetails) -> Self {
        Self {
            name: details.name(),
            phone: details.phone(),
            email: details.email(),
            contact_type: details.kind(),
        }
    }
}
