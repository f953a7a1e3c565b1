//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A reactive mirror of `session::SessionStore` snapshots. The store stays
//! the source of truth; this signal only drives rendering, route guards, and
//! the expiry timer. The raw token is deliberately left out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use session::{CurrentUser, Role, SessionSnapshot, SessionState};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<CurrentUser>,
    pub loading: bool,
    /// Token expiry in milliseconds since the Unix epoch.
    pub expires_at: Option<i64>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true, expires_at: None }
    }
}

impl From<&SessionSnapshot> for AuthState {
    fn from(snapshot: &SessionSnapshot) -> Self {
        Self {
            user: snapshot.user.clone(),
            loading: snapshot.is_loading(),
            expires_at: snapshot.expires_at,
        }
    }
}

impl AuthState {
    pub fn session_state(&self) -> SessionState {
        match (self.loading, &self.user) {
            (true, _) => SessionState::Loading,
            (false, Some(_)) => SessionState::Authenticated,
            (false, None) => SessionState::Unauthenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session_state() == SessionState::Authenticated
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == Role::Admin)
    }

    /// Login and register forms only render once the session resolved to
    /// signed out; a signed-in visitor is being redirected away.
    pub fn shows_auth_form(&self) -> bool {
        self.session_state() == SessionState::Unauthenticated
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }
}
