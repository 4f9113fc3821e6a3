//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages are only reached through `Guarded`.

pub mod home;
pub mod login;
pub mod profile;
pub mod records;
pub mod settings;
pub mod status;
