//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (implemented by storage adapters) expose strongly typed
//! errors; driving ports (called by inbound adapters) speak the domain
//! [`Error`](crate::domain::Error).

mod macros;
pub(crate) use macros::define_port_error;

mod contact_repository;
mod contacts_command;
mod contacts_query;

#[cfg(test)]
pub use contact_repository::MockContactRepository;
pub use contact_repository::{ContactRepository, ContactRepositoryError};
#[cfg(test)]
pub use contacts_command::MockContactsCommand;
pub use contacts_command::ContactsCommand;
#[cfg(test)]
pub use contacts_query::MockContactsQuery;
pub use contacts_query::ContactsQuery;
