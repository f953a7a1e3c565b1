use super::*;
use crate::session::SessionState;
use crate::store::TokenStore;
use crate::test_support::{NOW_SECS, client_at, token_for};

fn sign_in(f: &crate::test_support::ClientFixture) -> String {
    let token = token_for("u1", "alice", "user", NOW_SECS + 3600);
    f.fixture.tokens.set(&token).unwrap();
    f.fixture.session.check_validity();
    token
}

#[tokio::test]
async fn attaches_bearer_token_when_stored() {
    let f = client_at("/hotels");
    let token = sign_in(&f);
    f.transport.respond(200, serde_json::json!([]));

    let _: Vec<serde_json::Value> = f.client.send_json(ApiRequest::get("/hotels")).await.unwrap();

    let expected = format!("Bearer {token}");
    assert_eq!(f.transport.last_request().header("authorization"), Some(expected.as_str()));
}

#[tokio::test]
async fn sends_without_authorization_when_no_token() {
    let f = client_at("/hotels");
    f.transport.respond(200, serde_json::json!([]));

    let _: Vec<serde_json::Value> = f.client.send_json(ApiRequest::get("/hotels")).await.unwrap();

    assert_eq!(f.transport.last_request().header("Authorization"), None);
}

#[tokio::test]
async fn unauthorized_elsewhere_logs_out_and_redirects() {
    let f = client_at("/my-bookings");
    sign_in(&f);
    f.transport
        .respond(401, serde_json::json!({ "message": "Unauthorized", "statusCode": 401 }));

    let err = f
        .client
        .send_json::<serde_json::Value>(ApiRequest::get("/bookings/my-bookings"))
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(f.fixture.tokens.get(), None);
    assert_eq!(f.fixture.session.state(), SessionState::Unauthenticated);
    assert_eq!(f.navigator.redirects(), vec!["/login".to_owned()]);
}

#[tokio::test]
async fn unauthorized_from_login_endpoint_does_not_redirect() {
    let f = client_at("/hotels");
    let token = sign_in(&f);
    f.transport
        .respond(401, serde_json::json!({ "message": "Invalid credentials", "statusCode": 401 }));

    let err = f
        .client
        .send_json::<serde_json::Value>(ApiRequest::post("/auth/login"))
        .await
        .unwrap_err();

    assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    assert_eq!(f.fixture.tokens.get(), Some(token));
    assert!(f.navigator.redirects().is_empty());
}

#[tokio::test]
async fn unauthorized_while_on_login_or_register_view_is_left_alone() {
    for view in ["/login", "/register"] {
        let f = client_at(view);
        let token = sign_in(&f);
        f.transport.respond(401, serde_json::Value::Null);

        let _ = f.client.send_empty(ApiRequest::get("/hotels")).await;

        assert_eq!(f.fixture.tokens.get(), Some(token), "view {view}");
        assert!(f.navigator.redirects().is_empty(), "view {view}");
    }
}

#[tokio::test]
async fn other_errors_pass_through_untouched() {
    let f = client_at("/hotels");
    let token = sign_in(&f);
    f.transport.respond(
        403,
        serde_json::json!({ "message": "Forbidden resource", "error": "Forbidden", "statusCode": 403 }),
    );

    let err = f.client.send_empty(ApiRequest::delete("/hotels/h1")).await.unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert_eq!(err.user_message("x"), "Forbidden resource");
    assert_eq!(f.fixture.tokens.get(), Some(token));
    assert!(f.navigator.redirects().is_empty());
}

#[tokio::test]
async fn transport_failures_surface_as_transport_errors() {
    let f = client_at("/hotels");
    f.transport.fail(TransportError::Network("offline".to_owned()));

    let err = f.client.send_empty(ApiRequest::get("/hotels")).await.unwrap_err();

    assert_eq!(err, ApiError::Transport(TransportError::Network("offline".to_owned())));
}

#[tokio::test]
async fn undecodable_success_body_is_a_body_error() {
    let f = client_at("/hotels");
    f.transport.respond(200, serde_json::json!({ "unexpected": true }));

    let err = f
        .client
        .send_json::<Vec<String>>(ApiRequest::get("/hotels"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Body(_)));
}

#[test]
fn json_body_and_query_are_recorded_on_the_request() {
    let request = ApiRequest::post("/bookings")
        .json(&serde_json::json!({ "hotelId": "h1" }))
        .unwrap()
        .query(vec![("a".to_owned(), "1".to_owned())]);
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.body, Some(serde_json::json!({ "hotelId": "h1" })));
    assert_eq!(request.query, vec![("a".to_owned(), "1".to_owned())]);
}
