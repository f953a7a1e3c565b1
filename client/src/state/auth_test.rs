use super::*;

fn alice(role: Role) -> CurrentUser {
    CurrentUser { id: "u1".to_owned(), username: "alice".to_owned(), role }
}

#[test]
fn default_state_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
    assert_eq!(state.session_state(), SessionState::Loading);
    assert!(!state.is_authenticated());
}

#[test]
fn mirrors_authenticated_snapshot_without_token() {
    let snapshot = SessionSnapshot {
        state: SessionState::Authenticated,
        user: Some(alice(Role::Admin)),
        token: Some("a.b.c".to_owned()),
        expires_at: Some(1_000),
    };
    let state = AuthState::from(&snapshot);
    assert!(state.is_authenticated());
    assert!(state.is_admin());
    assert_eq!(state.username(), Some("alice"));
    assert_eq!(state.expires_at, Some(1_000));
}

#[test]
fn unauthenticated_snapshot_has_no_user() {
    let state = AuthState::from(&SessionSnapshot::unauthenticated());
    assert!(!state.loading);
    assert_eq!(state.session_state(), SessionState::Unauthenticated);
    assert!(!state.is_admin());
    assert_eq!(state.username(), None);
}

#[test]
fn regular_user_is_not_admin() {
    let state = AuthState { user: Some(alice(Role::User)), loading: false, expires_at: None };
    assert!(state.is_authenticated());
    assert!(!state.is_admin());
}

#[test]
fn auth_form_waits_for_session_to_resolve_signed_out() {
    assert!(!AuthState::default().shows_auth_form());

    let signed_in = AuthState { user: Some(alice(Role::User)), loading: false, expires_at: Some(1_000) };
    assert!(!signed_in.shows_auth_form());

    let signed_out = AuthState { user: None, loading: false, expires_at: None };
    assert!(signed_out.shows_auth_form());
}
