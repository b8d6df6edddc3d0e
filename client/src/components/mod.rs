//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome and read shared auth/settings
//! state from Leptos context providers installed by `app::App`.

pub mod ad_slot;
pub mod dashboard_shell;
pub mod require_auth;
