//! Domain primitives, ports and services.
//!
//! Purpose: define the contact entity, the errors inbound adapters map to
//! transport responses, and the service implementing the contact use-cases.
//! Nothing in this module depends on actix or Diesel.
//!
//! Public surface:
//! - `Contact`, `ContactDetails`, `ContactDraft`, `ContactId`: the entity and
//!   its validated/unvalidated field sets.
//! - `Error`, `ErrorCode`: transport-agnostic error payload.
//! - `ContactsService`: implements the `ContactsQuery` and `ContactsCommand`
//!   driving ports over any `ContactRepository`.

pub mod contact;
pub mod contacts_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::contact::{
    Contact, ContactDetails, ContactDraft, ContactField, ContactId, ContactValidationError,
    ContactValidationErrors,
};
pub use self::contacts_service::ContactsService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
