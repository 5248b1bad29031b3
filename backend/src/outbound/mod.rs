//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: PostgreSQL-backed contact storage using Diesel.
//! - **memory**: process-local contact storage for database-less runs.
//!
//! Adapters convert between domain types and storage representations and
//! contain no business logic.

pub mod memory;
pub mod persistence;
