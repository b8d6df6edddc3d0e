//! Hosted auth service client: password sign-in, user lookup, sign-out.
//!
//! DESIGN
//! ======
//! The hosted service is an opaque HTTP API. Route handlers talk to it only
//! through the `AuthBackend` trait so tests can swap in a fake. Responses are
//! flattened into `SessionUser`, the shape the browser client consumes.

#[cfg(test)]
#[path = "auth_service_test.rs"]
mod tests;

use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::AuthServiceConfig;

#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("credentials or session rejected")]
    Unauthorized,
    #[error("auth service request failed: {0}")]
    Transport(String),
    #[error("auth service returned {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("unexpected auth service response: {0}")]
    Decode(String),
}

/// User identity as exposed to the browser client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

/// Result of a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub access_token: String,
    /// Token lifetime in seconds, when the service reports one.
    pub expires_in: Option<i64>,
    pub user: SessionUser,
}

/// Provider-neutral auth operations. Enables mocking in tests.
#[async_trait::async_trait]
pub trait AuthBackend: Send + Sync {
    /// Exchange email + password for a session.
    ///
    /// # Errors
    ///
    /// `Unauthorized` for rejected credentials, other variants for service
    /// or network failures.
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthServiceError>;

    /// Resolve the user behind an access token.
    ///
    /// # Errors
    ///
    /// `Unauthorized` for expired or unknown tokens.
    async fn fetch_user(&self, access_token: &str) -> Result<SessionUser, AuthServiceError>;

    /// Revoke an access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the service could not be reached or refused.
    async fn sign_out(&self, access_token: &str) -> Result<(), AuthServiceError>;
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Default, Deserialize)]
struct UserMetadata {
    #[serde(default)]
    full_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HostedUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: Option<UserMetadata>,
}

impl From<HostedUser> for SessionUser {
    fn from(user: HostedUser) -> Self {
        Self {
            id: user.id,
            email: user.email.filter(|e| !e.is_empty()),
            full_name: user
                .user_metadata
                .and_then(|m| m.full_name)
                .filter(|n| !n.trim().is_empty()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    user: HostedUser,
}

pub(crate) fn parse_token_response(body: &str) -> Result<AuthSession, AuthServiceError> {
    let resp: TokenResponse = serde_json::from_str(body).map_err(|e| AuthServiceError::Decode(e.to_string()))?;
    Ok(AuthSession { access_token: resp.access_token, expires_in: resp.expires_in, user: resp.user.into() })
}

pub(crate) fn parse_user_response(body: &str) -> Result<SessionUser, AuthServiceError> {
    let user: HostedUser = serde_json::from_str(body).map_err(|e| AuthServiceError::Decode(e.to_string()))?;
    Ok(user.into())
}

/// Map a non-success status to an error. Credential and token rejections
/// become `Unauthorized`; everything else is an upstream failure.
pub(crate) fn status_error(status: u16, body: String) -> AuthServiceError {
    match status {
        400 | 401 | 403 | 422 => AuthServiceError::Unauthorized,
        _ => AuthServiceError::Upstream { status, body },
    }
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

/// `AuthBackend` backed by the hosted service's REST API.
pub struct HostedAuthClient {
    http: reqwest::Client,
    config: AuthServiceConfig,
}

impl HostedAuthClient {
    /// Build a client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: AuthServiceConfig) -> Result<Self, AuthServiceError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| AuthServiceError::Transport(e.to_string()))?;
        Ok(Self { http, config })
    }

    async fn read_body(resp: reqwest::Response) -> Result<(StatusCode, String), AuthServiceError> {
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| AuthServiceError::Transport(e.to_string()))?;
        Ok((status, body))
    }
}

#[async_trait::async_trait]
impl AuthBackend for HostedAuthClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthServiceError> {
        let resp = self
            .http
            .post(self.config.token_url())
            .header("apikey", &self.config.api_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AuthServiceError::Transport(e.to_string()))?;
        let (status, body) = Self::read_body(resp).await?;
        if !status.is_success() {
            return Err(status_error(status.as_u16(), body));
        }
        parse_token_response(&body)
    }

    async fn fetch_user(&self, access_token: &str) -> Result<SessionUser, AuthServiceError> {
        let resp = self
            .http
            .get(self.config.user_url())
            .header("apikey", &self.config.api_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthServiceError::Transport(e.to_string()))?;
        let (status, body) = Self::read_body(resp).await?;
        if !status.is_success() {
            return Err(status_error(status.as_u16(), body));
        }
        parse_user_response(&body)
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthServiceError> {
        let resp = self
            .http
            .post(self.config.logout_url())
            .header("apikey", &self.config.api_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthServiceError::Transport(e.to_string()))?;
        let (status, body) = Self::read_body(resp).await?;
        if !status.is_success() {
            return Err(status_error(status.as_u16(), body));
        }
        Ok(())
    }
}
