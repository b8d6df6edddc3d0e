//! Auth routes: proxy between the browser and the hosted auth service.
//!
//! The access token never reaches page scripts; it lives in an HttpOnly
//! cookie and is forwarded as a bearer token by these handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::services::auth_service::{AuthServiceError, SessionUser};
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "access_token";

fn session_cookie(token: String, secure: bool, max_age_secs: Option<i64>) -> Cookie<'static> {
    let mut cookie = Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build();
    if let Some(secs) = max_age_secs {
        cookie.set_max_age(Duration::seconds(secs));
    }
    cookie
}

fn cleared_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

fn auth_disabled() -> Response {
    (StatusCode::SERVICE_UNAVAILABLE, "auth service not configured").into_response()
}

pub(crate) fn auth_error_to_status(err: &AuthServiceError) -> StatusCode {
    match err {
        AuthServiceError::Unauthorized => StatusCode::UNAUTHORIZED,
        AuthServiceError::Transport(_) | AuthServiceError::Upstream { .. } | AuthServiceError::Decode(_) => {
            StatusCode::BAD_GATEWAY
        }
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/auth/me`: resolve the cookie's access token to a user.
pub async fn me(State(state): State<AppState>, jar: CookieJar) -> Response {
    let Some(auth) = &state.auth else {
        return auth_disabled();
    };
    let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
    if token.is_empty() {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    match auth.fetch_user(token).await {
        Ok(user) => Json::<SessionUser>(user).into_response(),
        Err(AuthServiceError::Unauthorized) => {
            // Expired or revoked token: drop it so later checks skip the round trip.
            let jar = jar.add(cleared_cookie(state.cookie_secure));
            (jar, StatusCode::UNAUTHORIZED).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "session lookup failed");
            auth_error_to_status(&e).into_response()
        }
    }
}

#[derive(Deserialize)]
pub struct LoginBody {
    email: String,
    password: String,
}

/// `POST /api/auth/login`: password sign-in, sets the session cookie.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(body): Json<LoginBody>) -> Response {
    let Some(auth) = &state.auth else {
        return auth_disabled();
    };
    let email = body.email.trim();
    if email.is_empty() || body.password.is_empty() {
        return (StatusCode::BAD_REQUEST, "email and password required").into_response();
    }

    match auth.sign_in(email, &body.password).await {
        Ok(session) => {
            tracing::info!(user_id = %session.user.id, "signed in");
            let cookie = session_cookie(session.access_token, state.cookie_secure, session.expires_in);
            (jar.add(cookie), Json(session.user)).into_response()
        }
        Err(AuthServiceError::Unauthorized) => (StatusCode::UNAUTHORIZED, "invalid credentials").into_response(),
        Err(e) => {
            tracing::error!(error = %e, "sign in failed");
            auth_error_to_status(&e).into_response()
        }
    }
}

/// `POST /api/auth/logout`: revoke the token upstream and clear the cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let (Some(auth), Some(cookie)) = (&state.auth, jar.get(COOKIE_NAME)) {
        if !cookie.value().is_empty() {
            if let Err(e) = auth.sign_out(cookie.value()).await {
                tracing::warn!(error = %e, "upstream sign out failed; clearing cookie anyway");
            }
        }
    }
    let jar = jar.add(cleared_cookie(state.cookie_secure));
    (jar, StatusCode::NO_CONTENT).into_response()
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
