//! Session store: the single source of truth for who is signed in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Created once by the application root and handed to the UI, the route
//! guard, and the HTTP pipeline. The UI mirrors snapshots into its own
//! reactive state through [`SessionStore::subscribe`].
//!
//! DESIGN
//! ======
//! `CurrentUser` is always projected from the decoded token, both on load and
//! on login, so the durable copy (the token) and the in-memory user can never
//! disagree. Expiry is only checked when [`SessionStore::check_validity`]
//! runs; the store itself never polls.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::claims::{self, Claims, DecodeError};
use crate::clock::Clock;
use crate::store::{StoreError, TokenStore};
use crate::types::{Role, User};

/// Tri-state session status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Validity has not been determined yet.
    Loading,
    Authenticated,
    Unauthenticated,
}

/// The signed-in user as projected from token claims.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
    pub role: Role,
}

impl From<&Claims> for CurrentUser {
    fn from(claims: &Claims) -> Self {
        Self {
            id: claims.sub.clone(),
            username: claims.username.clone(),
            role: claims.role,
        }
    }
}

/// Point-in-time view of the session handed to listeners.
///
/// Invariant: `user.is_some()` iff `state == Authenticated`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub user: Option<CurrentUser>,
    pub token: Option<String>,
    /// Token expiry in milliseconds since the Unix epoch.
    pub expires_at: Option<i64>,
}

impl SessionSnapshot {
    #[must_use]
    pub fn loading() -> Self {
        Self { state: SessionState::Loading, user: None, token: None, expires_at: None }
    }

    #[must_use]
    pub fn unauthenticated() -> Self {
        Self { state: SessionState::Unauthenticated, user: None, token: None, expires_at: None }
    }

    fn authenticated(token: String, claims: &Claims) -> Self {
        Self {
            state: SessionState::Authenticated,
            user: Some(CurrentUser::from(claims)),
            token: Some(token),
            expires_at: Some(claims.expires_at_millis()),
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::Authenticated && self.user.is_some() && self.token.is_some()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state == SessionState::Loading
    }
}

/// Error returned by [`SessionStore::login`].
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("login token could not be decoded: {0}")]
    Decode(#[from] DecodeError),
    #[error("login token is already expired")]
    Expired,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&SessionSnapshot) + Send + Sync>;

struct Inner {
    tokens: Arc<dyn TokenStore>,
    clock: Arc<dyn Clock>,
    snapshot: Mutex<SessionSnapshot>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_listener: AtomicU64,
}

/// Shared handle on the session; clones observe and mutate the same state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl SessionStore {
    /// Create a store in the `Loading` state. Call [`Self::check_validity`]
    /// once the application has mounted.
    pub fn new(tokens: Arc<dyn TokenStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(Inner {
                tokens,
                clock,
                snapshot: Mutex::new(SessionSnapshot::loading()),
                listeners: Mutex::new(Vec::new()),
                next_listener: AtomicU64::new(0),
            }),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.snapshot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.inner.snapshot.lock().unwrap_or_else(PoisonError::into_inner).state
    }

    #[must_use]
    pub fn current_user(&self) -> Option<CurrentUser> {
        self.snapshot().user
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.snapshot().token
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.snapshot().is_authenticated()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state() == SessionState::Loading
    }

    /// The persisted token slot backing this session.
    #[must_use]
    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.inner.tokens
    }

    /// Milliseconds until the held token expires, if authenticated.
    #[must_use]
    pub fn expires_in_millis(&self) -> Option<i64> {
        let expires_at = self.snapshot().expires_at?;
        Some(expires_at.saturating_sub(self.inner.clock.now_millis()))
    }

    /// Re-read the token slot and resolve the session state.
    ///
    /// A missing token yields `Unauthenticated`. An undecodable or expired
    /// token takes the logout path (the slot is cleared). A valid token yields
    /// `Authenticated` with the user projected from its claims. Never leaves
    /// the store in `Loading`.
    pub fn check_validity(&self) -> SessionState {
        let next = match self.inner.tokens.get() {
            None => SessionSnapshot::unauthenticated(),
            Some(token) => match claims::decode(&token) {
                Err(e) => {
                    log::warn!("stored session token is invalid ({e}); logging out");
                    self.clear_slot();
                    SessionSnapshot::unauthenticated()
                }
                Ok(claims) if claims.is_expired(self.inner.clock.now_millis()) => {
                    log::info!("session token for {} expired; logging out", claims.username);
                    self.clear_slot();
                    SessionSnapshot::unauthenticated()
                }
                Ok(claims) => SessionSnapshot::authenticated(token, &claims),
            },
        };
        let state = next.state;
        self.replace(next);
        state
    }

    /// Persist a freshly issued token and mark the session authenticated.
    ///
    /// The user is taken from the token claims. `user` is the object the
    /// backend returned alongside the token; a mismatch is logged and the
    /// token wins.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the token cannot be decoded, is already
    /// expired, or cannot be persisted. The session is unchanged on error.
    pub fn login(&self, token: &str, user: &User) -> Result<(), SessionError> {
        let claims = claims::decode(token)?;
        if claims.is_expired(self.inner.clock.now_millis()) {
            return Err(SessionError::Expired);
        }
        if claims.sub != user.id || claims.username != user.username || claims.role != user.role {
            log::warn!(
                "login response user {} disagrees with token claims for {}; using token claims",
                user.id,
                claims.sub
            );
        }
        self.inner.tokens.set(token)?;
        log::info!("logged in as {}", claims.username);
        self.replace(SessionSnapshot::authenticated(token.to_owned(), &claims));
        Ok(())
    }

    /// Clear the token slot and mark the session unauthenticated.
    pub fn logout(&self) {
        self.clear_slot();
        if self.state() == SessionState::Authenticated {
            log::info!("logged out");
        }
        self.replace(SessionSnapshot::unauthenticated());
    }

    /// React to a storage-change notification from another tab.
    ///
    /// `key` is the changed slot, or `None` when storage was wiped entirely.
    pub fn handle_storage_change(&self, key: Option<&str>) {
        if key.is_none_or(|k| k == self.inner.tokens.key()) {
            self.check_validity();
        }
    }

    /// Register a listener invoked with the new snapshot after every transition.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&SessionSnapshot) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_listener.fetch_add(1, Ordering::Relaxed));
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(existing, _)| *existing != id);
    }

    fn clear_slot(&self) {
        if let Err(e) = self.inner.tokens.clear() {
            log::warn!("failed to clear session token: {e}");
        }
    }

    fn replace(&self, next: SessionSnapshot) {
        *self.inner.snapshot.lock().unwrap_or_else(PoisonError::into_inner) = next.clone();
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&next);
        }
    }
}
