//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wires the `session::SessionStore` into Leptos: snapshots flow into the
//! `RwSignal<AuthState>` context, storage events from other tabs and the
//! token expiry re-run validity checks, and route components apply guard
//! decisions with identical redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use session::guard::{LOGIN_PATH, UNAUTHORIZED_PATH};
use session::{GuardDecision, SessionStore};

use crate::state::auth::AuthState;
use crate::util::storage;

/// Query parameter carrying the path to return to after login.
pub const RETURN_TO_PARAM: &str = "from";

/// Longest delay `setTimeout` honors; larger values fire immediately.
const MAX_TIMER_DELAY_MS: i64 = 2_147_483_647;

/// Login URL remembering `from`. Paths with characters that would need
/// escaping in a query string are not remembered.
pub fn login_url(from: &str) -> String {
    let plain = from.starts_with('/')
        && from
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '-' | '_' | '.' | '~'));
    if plain && from != "/" {
        format!("{LOGIN_PATH}?{RETURN_TO_PARAM}={from}")
    } else {
        LOGIN_PATH.to_owned()
    }
}

/// Timer delay for a token with `remaining_ms` left, clamped to what
/// browser timers accept.
pub fn expiry_delay_millis(remaining_ms: i64) -> u32 {
    u32::try_from(remaining_ms.clamp(0, MAX_TIMER_DELAY_MS)).unwrap_or(0)
}

/// Connect `session` to the `auth` signal and resolve the initial state.
///
/// Must run once, inside the root component's reactive owner.
pub fn bind_session(session: &SessionStore, auth: RwSignal<AuthState>) {
    session.subscribe(move |snapshot| auth.set(AuthState::from(snapshot)));
    let state = session.check_validity();
    log::debug!("initial session state: {state:?}");
    storage::watch_other_tabs(session.clone());
    schedule_expiry(session.clone(), auth);
}

/// Re-check validity when the current token expires. The timer is replaced
/// on every auth change and dropped (cancelled) on logout.
fn schedule_expiry(session: SessionStore, auth: RwSignal<AuthState>) {
    #[cfg(feature = "csr")]
    {
        use gloo_timers::callback::Timeout;

        Effect::new(move |previous: Option<Option<Timeout>>| {
            drop(previous);
            if !auth.get().is_authenticated() {
                return None;
            }
            let remaining = session.expires_in_millis()?;
            let session = session.clone();
            Some(Timeout::new(expiry_delay_millis(remaining), move || {
                session.check_validity();
            }))
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, auth);
    }
}

/// Navigate whenever `decision` resolves to a redirect.
pub fn install_route_guard<F>(decision: Memo<GuardDecision>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let target = match decision.get() {
            GuardDecision::RedirectToLogin { from } => login_url(&from),
            GuardDecision::RedirectToUnauthorized => UNAUTHORIZED_PATH.to_owned(),
            GuardDecision::Pending | GuardDecision::Render => return,
        };
        navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });
}

/// Send already-signed-in visitors of the login/register views to `target`.
pub fn install_signed_in_redirect<F, T>(auth: RwSignal<AuthState>, target: T, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
    T: Fn() -> String + 'static,
{
    Effect::new(move || {
        if auth.get().is_authenticated() {
            navigate(&target(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
