use super::*;

#[test]
fn user_message_uses_string_message() {
    let err = ApiError::from_status(
        409,
        r#"{"message":"No rooms available","error":"Conflict","statusCode":409}"#,
    );
    assert_eq!(err.user_message("fallback"), "No rooms available");
    assert_eq!(err.status(), Some(409));
}

#[test]
fn user_message_uses_first_list_entry() {
    let err = ApiError::from_status(
        400,
        r#"{"message":["username must be longer than 3 characters","password too short"],"statusCode":400}"#,
    );
    assert_eq!(err.user_message("fallback"), "username must be longer than 3 characters");
}

#[test]
fn user_message_falls_back_without_error_shape() {
    let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
    assert_eq!(err, ApiError::Status { status: 502, detail: None });
    assert_eq!(err.user_message("Failed to fetch hotels"), "Failed to fetch hotels");
}

#[test]
fn user_message_falls_back_for_empty_list() {
    let err = ApiError::from_status(400, r#"{"message":[],"statusCode":400}"#);
    assert_eq!(err.user_message("fallback"), "fallback");
}

#[test]
fn transport_errors_use_default_message() {
    let err = ApiError::from(TransportError::Network("connection refused".to_owned()));
    assert_eq!(err.user_message("Login failed"), "Login failed");
    assert_eq!(err.status(), None);
    assert!(!err.is_unauthorized());
}

#[test]
fn unauthorized_is_detected_by_status() {
    let err = ApiError::from_status(401, r#"{"message":"Unauthorized","statusCode":401}"#);
    assert!(err.is_unauthorized());
}
