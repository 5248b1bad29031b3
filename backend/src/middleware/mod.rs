//! Request middleware.
//!
//! Purpose: wrap every request in a trace scope so logs and error payloads
//! produced while handling it share one correlation identifier.

pub mod trace;

pub use trace::Trace;
