//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates chrome and
//! guarding to `components`.

pub mod campaigns;
pub mod login;
pub mod overview;
pub mod settings;
