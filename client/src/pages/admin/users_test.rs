use super::*;

fn user(username: &str, role: Role) -> User {
    User {
        id: "u2".to_owned(),
        username: username.to_owned(),
        role,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn admins_cannot_delete_themselves() {
    assert!(!can_delete(Some("u1"), "u1"));
    assert!(can_delete(Some("u1"), "u2"));
    assert!(can_delete(None, "u2"));
}

#[test]
fn changes_include_only_edited_fields() {
    let original = user("bob", Role::User);

    let dto = user_changes(&original, "bob", Role::Admin).unwrap().unwrap();
    assert_eq!(dto, UpdateUserDto { username: None, role: Some(Role::Admin) });

    let dto = user_changes(&original, " robert ", Role::User).unwrap().unwrap();
    assert_eq!(dto.username.as_deref(), Some("robert"));
    assert_eq!(dto.role, None);
}

#[test]
fn unchanged_form_produces_no_update() {
    assert_eq!(user_changes(&user("bob", Role::User), " bob ", Role::User), Ok(None));
}

#[test]
fn short_username_is_rejected() {
    assert_eq!(
        user_changes(&user("bob", Role::User), "bo", Role::User),
        Err(USERNAME_TOO_SHORT)
    );
}

#[test]
fn member_since_falls_back_when_missing() {
    assert_eq!(member_since(None), "N/A");
    assert_eq!(member_since(Some("2026-01-05T08:00:00.000Z")), "05 Jan 2026");
}
