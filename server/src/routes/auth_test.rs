use std::sync::{Arc, Mutex};

use axum::body::{Body, to_bytes};
use axum::http::{Request, header};
use tower::ServiceExt;

use super::*;
use crate::routes::api_routes;
use crate::services::auth_service::{AuthBackend, AuthSession};

// =============================================================================
// FAKE BACKEND
// =============================================================================

#[derive(Default)]
struct FakeAuth {
    /// Token accepted by `fetch_user`.
    valid_token: Option<String>,
    /// When set, every call fails with a transport error.
    offline: bool,
    signed_out: Mutex<Vec<String>>,
}

fn ada() -> SessionUser {
    SessionUser { id: "u1".to_owned(), email: Some("ada@example.com".to_owned()), full_name: None }
}

#[async_trait::async_trait]
impl AuthBackend for FakeAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthServiceError> {
        if self.offline {
            return Err(AuthServiceError::Transport("offline".to_owned()));
        }
        if email == "ada@example.com" && password == "correct" {
            return Ok(AuthSession { access_token: "tok-1".to_owned(), expires_in: Some(3600), user: ada() });
        }
        Err(AuthServiceError::Unauthorized)
    }

    async fn fetch_user(&self, access_token: &str) -> Result<SessionUser, AuthServiceError> {
        if self.offline {
            return Err(AuthServiceError::Transport("offline".to_owned()));
        }
        match &self.valid_token {
            Some(valid) if valid == access_token => Ok(ada()),
            _ => Err(AuthServiceError::Unauthorized),
        }
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthServiceError> {
        self.signed_out.lock().unwrap().push(access_token.to_owned());
        Ok(())
    }
}

fn state_with(fake: Arc<FakeAuth>) -> AppState {
    let backend: Arc<dyn AuthBackend> = fake;
    AppState::new(Some(backend), false)
}

fn set_cookie(resp: &Response) -> String {
    resp.headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}

async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// HELPERS
// =============================================================================

#[test]
fn auth_error_to_status_maps_variants() {
    assert_eq!(auth_error_to_status(&AuthServiceError::Unauthorized), StatusCode::UNAUTHORIZED);
    assert_eq!(auth_error_to_status(&AuthServiceError::Transport("x".into())), StatusCode::BAD_GATEWAY);
    assert_eq!(
        auth_error_to_status(&AuthServiceError::Upstream { status: 500, body: String::new() }),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(auth_error_to_status(&AuthServiceError::Decode("x".into())), StatusCode::BAD_GATEWAY);
}

#[test]
fn session_cookie_is_http_only_and_lax() {
    let cookie = session_cookie("tok".to_owned(), true, Some(60));
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "tok");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.max_age(), Some(Duration::seconds(60)));
}

#[test]
fn cleared_cookie_expires_immediately() {
    let cookie = cleared_cookie(false);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
}

// =============================================================================
// ROUTES
// =============================================================================

#[tokio::test]
async fn healthz_is_ok() {
    let app = api_routes(AppState::new(None, false));
    let resp = app.oneshot(Request::get("/healthz").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn me_without_backend_is_unavailable() {
    let app = api_routes(AppState::new(None, false));
    let resp = app.oneshot(Request::get("/api/auth/me").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn me_without_cookie_is_unauthorized() {
    let app = api_routes(state_with(Arc::new(FakeAuth::default())));
    let resp = app.oneshot(Request::get("/api/auth/me").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_with_valid_cookie_returns_user() {
    let fake = Arc::new(FakeAuth { valid_token: Some("tok-1".to_owned()), ..FakeAuth::default() });
    let app = api_routes(state_with(fake));
    let req = Request::get("/api/auth/me")
        .header(header::COOKIE, "access_token=tok-1")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "id": "u1", "email": "ada@example.com", "full_name": null })
    );
}

#[tokio::test]
async fn me_with_stale_cookie_clears_it() {
    let fake = Arc::new(FakeAuth { valid_token: Some("tok-1".to_owned()), ..FakeAuth::default() });
    let app = api_routes(state_with(fake));
    let req = Request::get("/api/auth/me")
        .header(header::COOKIE, "access_token=expired")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(set_cookie(&resp).contains("Max-Age=0"));
}

#[tokio::test]
async fn me_when_service_unreachable_is_bad_gateway() {
    let fake = Arc::new(FakeAuth { offline: true, ..FakeAuth::default() });
    let app = api_routes(state_with(fake));
    let req = Request::get("/api/auth/me")
        .header(header::COOKIE, "access_token=tok-1")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

fn login_request(email: &str, password: &str) -> Request<Body> {
    Request::post("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::json!({ "email": email, "password": password }).to_string()))
        .unwrap()
}

#[tokio::test]
async fn login_sets_session_cookie_and_returns_user() {
    let app = api_routes(state_with(Arc::new(FakeAuth::default())));
    let resp = app.oneshot(login_request(" ada@example.com ", "correct")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let cookie = set_cookie(&resp);
    assert!(cookie.starts_with("access_token=tok-1"), "{cookie}");
    assert!(cookie.contains("HttpOnly"), "{cookie}");
    assert!(cookie.contains("Max-Age=3600"), "{cookie}");

    assert_eq!(body_json(resp).await["id"], "u1");
}

#[tokio::test]
async fn login_with_bad_password_is_unauthorized() {
    let app = api_routes(state_with(Arc::new(FakeAuth::default())));
    let resp = app.oneshot(login_request("ada@example.com", "wrong")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(set_cookie(&resp).is_empty());
}

#[tokio::test]
async fn login_with_missing_fields_is_bad_request() {
    let app = api_routes(state_with(Arc::new(FakeAuth::default())));
    let resp = app.oneshot(login_request("  ", "pw")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_when_service_unreachable_is_bad_gateway() {
    let fake = Arc::new(FakeAuth { offline: true, ..FakeAuth::default() });
    let app = api_routes(state_with(fake));
    let resp = app.oneshot(login_request("ada@example.com", "correct")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn logout_revokes_token_and_clears_cookie() {
    let fake = Arc::new(FakeAuth::default());
    let app = api_routes(state_with(fake.clone()));
    let req = Request::post("/api/auth/logout")
        .header(header::COOKIE, "access_token=tok-1")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(set_cookie(&resp).contains("Max-Age=0"));
    assert_eq!(*fake.signed_out.lock().unwrap(), vec!["tok-1".to_owned()]);
}

#[tokio::test]
async fn logout_without_cookie_still_succeeds() {
    let fake = Arc::new(FakeAuth::default());
    let app = api_routes(state_with(fake.clone()));
    let resp = app.oneshot(Request::post("/api/auth/logout").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(fake.signed_out.lock().unwrap().is_empty());
}
