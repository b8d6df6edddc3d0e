//! Networking modules for the auth proxy.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls against `/api/auth/*` and `types` defines the
//! shared wire schema.

pub mod api;
pub mod types;
