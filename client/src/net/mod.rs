//! Networking modules for the prediction endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema shared with the server relay, and `api`
//! performs the single request/response exchange and classifies its outcome.

pub mod api;
pub mod types;
