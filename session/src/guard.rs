//! Per-navigation access decisions for protected views.
//!
//! Each evaluation ends in exactly one of render, redirect-to-login, or
//! redirect-to-unauthorized, except while the session is still loading, when
//! no decision is made and a placeholder is shown.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::session::{CurrentUser, SessionState};
use crate::types::Role;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// Who may open a route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Any signed-in user.
    Authenticated,
    /// Signed-in users holding one of these roles. An empty list behaves
    /// like [`Access::Authenticated`].
    Roles(Vec<Role>),
}

impl Access {
    #[must_use]
    pub fn admin() -> Self {
        Self::Roles(vec![Role::Admin])
    }
}

/// Outcome of a guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not resolved yet; render a neutral placeholder.
    Pending,
    Render,
    /// Send to login, remembering `from` for the post-login redirect.
    RedirectToLogin { from: String },
    RedirectToUnauthorized,
}

impl GuardDecision {
    /// Target path for redirect decisions.
    #[must_use]
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            Self::RedirectToLogin { .. } => Some(LOGIN_PATH),
            Self::RedirectToUnauthorized => Some(UNAUTHORIZED_PATH),
            Self::Pending | Self::Render => None,
        }
    }
}

/// Decide whether `requested_path` may render for the given session.
#[must_use]
pub fn evaluate(
    state: SessionState,
    user: Option<&CurrentUser>,
    access: &Access,
    requested_path: &str,
) -> GuardDecision {
    if *access == Access::Public {
        return GuardDecision::Render;
    }
    let user = match (state, user) {
        (SessionState::Loading, _) => return GuardDecision::Pending,
        (SessionState::Authenticated, Some(user)) => user,
        _ => return GuardDecision::RedirectToLogin { from: requested_path.to_owned() },
    };
    match access {
        Access::Roles(roles) if !roles.is_empty() && !roles.contains(&user.role) => {
            GuardDecision::RedirectToUnauthorized
        }
        _ => GuardDecision::Render,
    }
}

/// Where to go after a successful login: the remembered path, unless it is
/// missing or points back at an auth view.
#[must_use]
pub fn post_login_path(from: Option<&str>) -> String {
    match from {
        Some(path)
            if path.starts_with('/') && !path.starts_with("//") && path != LOGIN_PATH && path != REGISTER_PATH =>
        {
            path.to_owned()
        }
        _ => HOME_PATH.to_owned(),
    }
}
