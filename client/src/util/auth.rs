//! Route-guard decisions and login redirect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes all apply the same rule: wait while the session is
//! loading, render when a user is present, otherwise replace the current
//! history entry with the login page and remember where the user was headed.
//!
//! DESIGN
//! ======
//! `evaluate` is a pure transition from session state to a `GuardDecision`.
//! Navigation happens only in `dispatch`, which the `RequireAuth` component
//! runs from an effect; rendering never navigates.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos_router::NavigateOptions;
use leptos_router::location::State;

use crate::state::auth::AuthState;

/// Login route used when a guard does not name its own target.
pub const DEFAULT_LOGIN_PATH: &str = "/admin/login";

/// Where the login page sends users who arrived without a return location.
pub const DEFAULT_AFTER_LOGIN_PATH: &str = "/advertiser";

/// Session phase as seen by a guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Loading,
    Authenticated,
    Unauthenticated,
}

impl GuardState {
    /// Loading wins over user presence.
    #[must_use]
    pub fn from_auth(state: &AuthState) -> Self {
        if state.loading {
            Self::Loading
        } else if state.user.is_some() {
            Self::Authenticated
        } else {
            Self::Unauthenticated
        }
    }
}

/// A navigation the guard wants performed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationIntent {
    /// Destination path.
    pub to: String,
    /// Replace the current history entry instead of pushing.
    pub replace: bool,
    /// Location the user originally requested.
    pub from: String,
}

/// What a guard should do for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still loading: show the status placeholder.
    ShowPlaceholder,
    /// Authenticated: render protected children unchanged.
    RenderChildren,
    /// Unauthenticated: navigate away.
    Redirect(NavigationIntent),
}

/// Decide what a guard protecting `current_location` should do.
#[must_use]
pub fn evaluate(state: &AuthState, current_location: &str, redirect_to: &str) -> GuardDecision {
    match GuardState::from_auth(state) {
        GuardState::Loading => GuardDecision::ShowPlaceholder,
        GuardState::Authenticated => GuardDecision::RenderChildren,
        GuardState::Unauthenticated => GuardDecision::Redirect(NavigationIntent {
            to: redirect_to.to_owned(),
            replace: true,
            from: current_location.to_owned(),
        }),
    }
}

/// Join router location parts into one path string.
#[must_use]
pub fn current_location(pathname: &str, search: &str, hash: &str) -> String {
    let mut out = String::with_capacity(pathname.len() + search.len() + hash.len() + 2);
    out.push_str(pathname);
    if !search.is_empty() {
        if !search.starts_with('?') {
            out.push('?');
        }
        out.push_str(search);
    }
    if !hash.is_empty() {
        if !hash.starts_with('#') {
            out.push('#');
        }
        out.push_str(hash);
    }
    out
}

/// Perform `intent` through a router navigate function.
pub fn dispatch<F>(intent: &NavigationIntent, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    dispatch_with_state(intent, navigate, from_state);
}

/// `dispatch` with the history-state builder supplied by the caller.
fn dispatch_with_state<F, S>(intent: &NavigationIntent, navigate: &F, build_state: S)
where
    F: Fn(&str, NavigateOptions),
    S: FnOnce(&str) -> State,
{
    navigate(
        &intent.to,
        NavigateOptions {
            replace: intent.replace,
            state: build_state(&intent.from),
            ..NavigateOptions::default()
        },
    );
}

/// History state `{ from }` carried to the login page.
fn from_state(from: &str) -> State {
    #[cfg(feature = "hydrate")]
    {
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &obj,
            &wasm_bindgen::JsValue::from_str("from"),
            &wasm_bindgen::JsValue::from_str(from),
        );
        State::new(Some(obj.into()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = from;
        NavigateOptions::default().state
    }
}

/// Read `from` out of the current history entry's state, if present.
pub fn history_from() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let state = web_sys::window()?.history().ok()?.state().ok()?;
        js_sys::Reflect::get(&state, &wasm_bindgen::JsValue::from_str("from"))
            .ok()?
            .as_string()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Pick the post-login destination from a candidate return location.
///
/// Only same-origin absolute paths are honored. Protocol-relative URLs,
/// external URLs and the login page itself fall back to `fallback`. Control
/// characters are rejected outright: URL parsers strip tab and newline, so
/// `/\t/host` would otherwise resolve as `//host`.
#[must_use]
pub fn return_path(from: Option<&str>, login_path: &str, fallback: &str) -> String {
    from.map(str::trim)
        .filter(|p| !p.chars().any(char::is_control))
        .filter(|p| p.starts_with('/') && !p.starts_with("//") && !p.contains('\\'))
        .filter(|p| {
            let path = p.split(['?', '#']).next().unwrap_or_default();
            path != login_path
        })
        .unwrap_or(fallback)
        .to_owned()
}
