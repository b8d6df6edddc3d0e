use super::*;

#[test]
fn endpoints_live_under_auth_proxy() {
    for endpoint in [ME_ENDPOINT, LOGIN_ENDPOINT, LOGOUT_ENDPOINT] {
        assert!(endpoint.starts_with("/api/auth/"), "{endpoint}");
    }
}

#[test]
fn login_failed_message_hides_status_for_bad_credentials() {
    assert_eq!(login_failed_message(401), "Invalid email or password.");
    assert_eq!(login_failed_message(400), "Invalid email or password.");
}

#[test]
fn login_failed_message_formats_other_statuses() {
    assert_eq!(login_failed_message(502), "sign in failed: 502");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_current_user_is_none_outside_browser() {
    let user = block_on_ready(fetch_current_user());
    assert_eq!(user, None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn sign_in_is_unavailable_outside_browser() {
    let result = block_on_ready(sign_in("a@b.com", "pw"));
    assert_eq!(result, Err("not available on server".to_owned()));
}

#[cfg(not(feature = "hydrate"))]
/// Drive a future that never yields `Pending` (the non-hydrate stubs).
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::task::{Context, Poll, Waker};
    let mut fut = std::pin::pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("stub future unexpectedly pending"),
    }
}
