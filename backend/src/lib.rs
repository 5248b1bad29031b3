//! Contacts library modules.
//!
//! A contact book served as HTML pages and a JSON API. The crate is laid out
//! as a hexagon: [`domain`] holds the entity, ports and service; [`inbound`]
//! adapts HTTP onto the driving ports; [`outbound`] implements the storage
//! port over PostgreSQL or process memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
