//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the pure state container and its transition table;
//! `session_controller` applies its side effects to the credential store.

pub mod auth;
pub mod session_controller;
