use super::*;
use crate::test_support::{encode_token, token_for};

#[test]
fn decode_reads_all_claims() {
    let token = token_for("u1", "alice", "user", 1_800_000_000);
    let claims = decode(&token).unwrap();
    assert_eq!(claims.sub, "u1");
    assert_eq!(claims.username, "alice");
    assert_eq!(claims.role, Role::User);
    assert_eq!(claims.expires_at_millis(), 1_800_000_000_000);
    assert_eq!(claims.iat, Some(1_799_996_400.0));
}

#[test]
fn decode_accepts_missing_iat() {
    let token = encode_token(&serde_json::json!({
        "sub": "u2",
        "username": "bob",
        "role": "admin",
        "exp": 10
    }));
    let claims = decode(&token).unwrap();
    assert_eq!(claims.role, Role::Admin);
    assert_eq!(claims.iat, None);
}

#[test]
fn decode_rejects_wrong_segment_count() {
    assert!(matches!(decode("abc"), Err(DecodeError::Malformed(1))));
    assert!(matches!(decode("a.b.c.d"), Err(DecodeError::Malformed(4))));
    assert!(matches!(decode(""), Err(DecodeError::Malformed(1))));
}

#[test]
fn decode_rejects_non_base64_payload() {
    assert!(matches!(decode("h.!!!.s"), Err(DecodeError::Payload(_))));
}

#[test]
fn decode_rejects_payload_without_claims() {
    let token = encode_token(&serde_json::json!({ "sub": "u1" }));
    assert!(matches!(decode(&token), Err(DecodeError::Claims(_))));
}

#[test]
fn decode_rejects_unknown_role() {
    let token = encode_token(&serde_json::json!({
        "sub": "u1",
        "username": "alice",
        "role": "owner",
        "exp": 10
    }));
    assert!(matches!(decode(&token), Err(DecodeError::Claims(_))));
}

#[test]
fn expiry_boundary_is_inclusive() {
    let claims = decode(&token_for("u1", "alice", "user", 100)).unwrap();
    assert!(!claims.is_expired(99_999));
    assert!(claims.is_expired(100_000));
    assert!(claims.is_expired(100_001));
}

#[test]
fn decode_accepts_fractional_numeric_dates() {
    let token = encode_token(&serde_json::json!({
        "sub": "u1",
        "username": "alice",
        "role": "user",
        "exp": 1_792_112_400.5,
        "iat": 1_792_108_800.25
    }));
    let claims = decode(&token).unwrap();
    assert_eq!(claims.expires_at_millis(), 1_792_112_400_500);
    assert!(!claims.is_expired(1_792_112_400_499));
    assert!(claims.is_expired(1_792_112_400_500));
}

#[test]
fn far_past_expiry_saturates_instead_of_overflowing() {
    let token = encode_token(&serde_json::json!({
        "sub": "u1",
        "username": "alice",
        "role": "user",
        "exp": -1.0e300
    }));
    let claims = decode(&token).unwrap();
    assert_eq!(claims.expires_at_millis(), i64::MIN);
    assert!(claims.is_expired(i64::MIN));
}
