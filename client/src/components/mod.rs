//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and the guard wrapper while reading the
//! shared auth state from Leptos context providers.

pub mod guarded;
pub mod session_bar;
pub mod sidebar_layout;
