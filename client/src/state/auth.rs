//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and the dashboard shell to coordinate login
//! redirects and identity-dependent rendering. The state itself is owned by
//! the hosted auth service; this module only mirrors what it last reported.
//!
//! CONCURRENCY
//! ===========
//! Session checks are asynchronous and may overlap (initial load, a login
//! completing, a sign-out). Every check is tagged with a generation number;
//! only the newest generation may write its result, so a slow stale response
//! can never resurrect or drop a session after a newer decision was made.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    generation: u64,
}

impl Default for AuthState {
    /// Unknown session: loading until the first check completes.
    fn default() -> Self {
        Self { user: None, loading: true, generation: 0 }
    }
}

/// Ticket for one in-flight session check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionCheck(u64);

impl AuthState {
    /// Settled state with `user` present.
    #[must_use]
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false, generation: 0 }
    }

    /// Settled state with no user.
    #[must_use]
    pub fn signed_out() -> Self {
        Self { user: None, loading: false, generation: 0 }
    }

    /// Start a session check. Marks the state as loading and supersedes any
    /// check already in flight.
    pub fn begin_check(&mut self) -> SessionCheck {
        self.generation += 1;
        self.loading = true;
        SessionCheck(self.generation)
    }

    /// Whether `check` is still the newest check issued.
    #[must_use]
    pub fn is_current(&self, check: SessionCheck) -> bool {
        check.0 == self.generation
    }

    /// Apply the result of `check`. Returns `false` and leaves the state
    /// untouched when a newer check or a sign-out has superseded it.
    pub fn finish_check(&mut self, check: SessionCheck, user: Option<User>) -> bool {
        if !self.is_current(check) {
            return false;
        }
        self.user = user;
        self.loading = false;
        true
    }

    /// Record a successful interactive sign-in, superseding pending checks.
    pub fn sign_in(&mut self, user: User) {
        self.generation += 1;
        self.user = Some(user);
        self.loading = false;
    }

    /// Drop the user locally, superseding pending checks.
    pub fn sign_out(&mut self) {
        self.generation += 1;
        self.user = None;
        self.loading = false;
    }
}
