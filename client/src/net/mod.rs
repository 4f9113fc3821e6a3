//! Networking modules for the remote asset API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles login and authorized REST calls, `transport` is the HTTP seam
//! the login goes through, and `types` defines the wire schema.

pub mod api;
pub mod transport;
pub mod types;
