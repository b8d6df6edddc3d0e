//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `settings`) so components depend on
//! small focused models instead of one global store.

pub mod auth;
pub mod settings;
