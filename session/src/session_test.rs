use std::sync::atomic::AtomicUsize;

use super::*;
use crate::store::{MemoryStorage, TokenStore};
use crate::test_support::{NOW_SECS, fixture, fixture_with, token_for};

fn alice() -> User {
    User {
        id: "u1".to_owned(),
        username: "alice".to_owned(),
        role: Role::User,
        created_at: None,
        updated_at: None,
    }
}

// =============================================================
// check_validity
// =============================================================

#[test]
fn new_store_starts_loading() {
    let f = fixture();
    assert!(f.session.is_loading());
    assert!(!f.session.is_authenticated());
}

#[test]
fn missing_token_resolves_unauthenticated() {
    let f = fixture();
    assert_eq!(f.session.check_validity(), SessionState::Unauthenticated);
    assert_eq!(f.session.current_user(), None);
    assert!(!f.session.is_loading());
}

#[test]
fn future_token_resolves_authenticated_with_claims_user() {
    let f = fixture();
    let token = token_for("u1", "alice", "user", NOW_SECS + 3600);
    f.tokens.set(&token).unwrap();

    assert_eq!(f.session.check_validity(), SessionState::Authenticated);
    assert_eq!(
        f.session.current_user(),
        Some(CurrentUser { id: "u1".to_owned(), username: "alice".to_owned(), role: Role::User })
    );
    assert_eq!(f.session.token().as_deref(), Some(token.as_str()));
    assert!(f.session.is_authenticated());
}

#[test]
fn expired_token_logs_out_and_clears_storage() {
    let f = fixture();
    f.tokens.set(&token_for("u1", "alice", "user", NOW_SECS - 1)).unwrap();

    assert_eq!(f.session.check_validity(), SessionState::Unauthenticated);
    assert_eq!(f.tokens.get(), None);
    assert_eq!(f.session.current_user(), None);
}

#[test]
fn token_expiring_exactly_now_is_expired() {
    let f = fixture();
    f.tokens.set(&token_for("u1", "alice", "user", NOW_SECS)).unwrap();
    assert_eq!(f.session.check_validity(), SessionState::Unauthenticated);
    assert_eq!(f.tokens.get(), None);
}

#[test]
fn malformed_token_behaves_like_expired() {
    for bad in ["not-a-token", "a.b", "x.!!!.y", "a.e30.b"] {
        let f = fixture();
        f.tokens.set(bad).unwrap();
        assert_eq!(f.session.check_validity(), SessionState::Unauthenticated, "token {bad}");
        assert_eq!(f.tokens.get(), None, "token {bad}");
        assert_eq!(f.session.current_user(), None);
    }
}

#[test]
fn check_after_clock_passes_expiry_logs_out() {
    let f = fixture();
    f.tokens.set(&token_for("u1", "alice", "user", NOW_SECS + 60)).unwrap();
    assert_eq!(f.session.check_validity(), SessionState::Authenticated);

    f.clock.advance(60_000);
    assert_eq!(f.session.check_validity(), SessionState::Unauthenticated);
    assert_eq!(f.tokens.get(), None);
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_persists_exact_token_and_authenticates() {
    let f = fixture();
    f.session.check_validity();
    let token = token_for("u1", "alice", "user", NOW_SECS + 3600);

    f.session.login(&token, &alice()).unwrap();

    assert!(f.session.is_authenticated());
    assert_eq!(f.tokens.get().as_deref(), Some(token.as_str()));
}

#[test]
fn login_prefers_token_claims_over_response_user() {
    let f = fixture();
    let token = token_for("u1", "alice", "admin", NOW_SECS + 3600);

    f.session.login(&token, &alice()).unwrap();

    assert_eq!(f.session.current_user().map(|u| u.role), Some(Role::Admin));
}

#[test]
fn login_rejects_undecodable_token_without_storing() {
    let f = fixture();
    f.session.check_validity();

    let err = f.session.login("garbage", &alice()).unwrap_err();

    assert!(matches!(err, SessionError::Decode(_)));
    assert_eq!(f.tokens.get(), None);
    assert_eq!(f.session.state(), SessionState::Unauthenticated);
}

#[test]
fn login_rejects_expired_token() {
    let f = fixture();
    let err = f
        .session
        .login(&token_for("u1", "alice", "user", NOW_SECS - 10), &alice())
        .unwrap_err();
    assert!(matches!(err, SessionError::Expired));
    assert_eq!(f.tokens.get(), None);
}

#[test]
fn logout_clears_storage_and_state() {
    let f = fixture();
    f.session
        .login(&token_for("u1", "alice", "user", NOW_SECS + 3600), &alice())
        .unwrap();

    f.session.logout();

    assert!(!f.session.is_authenticated());
    assert_eq!(f.session.state(), SessionState::Unauthenticated);
    assert_eq!(f.tokens.get(), None);
    assert_eq!(f.session.expires_in_millis(), None);
}

#[test]
fn expires_in_tracks_clock() {
    let f = fixture();
    f.session
        .login(&token_for("u1", "alice", "user", NOW_SECS + 10), &alice())
        .unwrap();
    assert_eq!(f.session.expires_in_millis(), Some(10_000));
    f.clock.advance(4_000);
    assert_eq!(f.session.expires_in_millis(), Some(6_000));
}

// =============================================================
// subscribers and cross-tab sync
// =============================================================

#[test]
fn subscribers_receive_each_transition() {
    let f = fixture();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    f.session.subscribe(move |snapshot| sink.lock().unwrap().push(snapshot.state));

    f.session.check_validity();
    f.session
        .login(&token_for("u1", "alice", "user", NOW_SECS + 3600), &alice())
        .unwrap();
    f.session.logout();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            SessionState::Unauthenticated,
            SessionState::Authenticated,
            SessionState::Unauthenticated
        ]
    );
}

#[test]
fn unsubscribed_listener_is_not_called() {
    let f = fixture();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let id = f.session.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    f.session.check_validity();
    f.session.unsubscribe(id);
    f.session.logout();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn storage_change_for_other_keys_is_ignored() {
    let f = fixture();
    f.session.handle_storage_change(Some("theme"));
    assert!(f.session.is_loading());
    f.session.handle_storage_change(Some("token"));
    assert!(!f.session.is_loading());
}

#[test]
fn storage_wipe_triggers_recheck() {
    let f = fixture();
    f.session.handle_storage_change(None);
    assert_eq!(f.session.state(), SessionState::Unauthenticated);
}

#[test]
fn logout_in_one_tab_propagates_to_the_other() {
    let storage = MemoryStorage::new();
    let tab_a = fixture_with(storage.tab("token"));
    let tab_b = fixture_with(storage.tab("token"));
    let b_session = tab_b.session.clone();
    tab_b.tokens.watch(move |key| b_session.handle_storage_change(key));

    tab_a
        .session
        .login(&token_for("u1", "alice", "user", NOW_SECS + 3600), &alice())
        .unwrap();
    assert_eq!(tab_b.session.state(), SessionState::Authenticated);

    tab_a.session.logout();

    assert_eq!(tab_b.session.state(), SessionState::Unauthenticated);
    assert_eq!(tab_b.session.current_user(), None);
}
