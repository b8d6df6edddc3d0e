use super::*;

fn user(id: &str) -> User {
    User::with_id(id)
}

#[test]
fn default_state_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn finish_check_applies_current_result() {
    let mut state = AuthState::default();
    let check = state.begin_check();
    assert!(state.finish_check(check, Some(user("u1"))));
    assert!(!state.loading);
    assert_eq!(state.user, Some(user("u1")));
}

#[test]
fn finish_check_with_no_user_settles_signed_out() {
    let mut state = AuthState::default();
    let check = state.begin_check();
    assert!(state.finish_check(check, None));
    assert!(!state.loading);
    assert!(state.user.is_none());
}

#[test]
fn stale_check_is_discarded() {
    let mut state = AuthState::default();
    let first = state.begin_check();
    let second = state.begin_check();

    assert!(state.finish_check(second, Some(user("fresh"))));
    assert!(!state.finish_check(first, None));
    assert_eq!(state.user, Some(user("fresh")));
}

#[test]
fn stale_check_does_not_clear_loading() {
    let mut state = AuthState::default();
    let first = state.begin_check();
    let _second = state.begin_check();
    assert!(!state.finish_check(first, Some(user("old"))));
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn sign_out_supersedes_in_flight_check() {
    let mut state = AuthState::signed_in(user("u1"));
    let check = state.begin_check();
    state.sign_out();

    assert!(!state.is_current(check));
    assert!(!state.finish_check(check, Some(user("u1"))));
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn sign_in_supersedes_in_flight_check() {
    let mut state = AuthState::default();
    let check = state.begin_check();
    state.sign_in(user("u2"));

    assert!(!state.finish_check(check, None));
    assert_eq!(state.user, Some(user("u2")));
}

#[test]
fn settled_constructors() {
    assert_eq!(AuthState::signed_out().user, None);
    assert!(!AuthState::signed_out().loading);
    assert_eq!(AuthState::signed_in(user("u1")).user, Some(user("u1")));
    assert!(!AuthState::signed_in(user("u1")).loading);
}
