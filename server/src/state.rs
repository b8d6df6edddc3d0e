//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! auth backend is optional so pages can still render when the hosted
//! service is not configured.

use std::sync::Arc;

use crate::services::auth_service::AuthBackend;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    /// `None` if the auth service env vars are not configured.
    pub auth: Option<Arc<dyn AuthBackend>>,
    /// Mark auth cookies `Secure`.
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(auth: Option<Arc<dyn AuthBackend>>, cookie_secure: bool) -> Self {
        Self { auth, cookie_secure }
    }
}
