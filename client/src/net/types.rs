//! Wire DTOs for the client/server auth boundary.
//!
//! DESIGN
//! ======
//! These types mirror the JSON returned by the server's `/api/auth/*` proxy,
//! which in turn flattens the hosted auth service's user record.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the `/api/auth/me` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier assigned by the auth service.
    pub id: String,
    /// Login email address, if the account has one.
    #[serde(default)]
    pub email: Option<String>,
    /// Profile full name, if the user filled one in.
    #[serde(default)]
    pub full_name: Option<String>,
}

impl User {
    /// User with only an identifier, as seen right after sign-up.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self { id: id.into(), email: None, full_name: None }
    }
}

/// Credentials body for `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
