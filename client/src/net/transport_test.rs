use super::*;

#[test]
fn request_url_joins_without_double_slash() {
    assert_eq!(request_url("http://localhost:3001/api", "/hotels"), "http://localhost:3001/api/hotels");
    assert_eq!(request_url("http://localhost:3001/api/", "/hotels/h1"), "http://localhost:3001/api/hotels/h1");
    assert_eq!(request_url("https://x.test/api", "users/me"), "https://x.test/api/users/me");
}

#[test]
fn request_url_with_empty_path_is_base() {
    assert_eq!(request_url("https://x.test/api/", ""), "https://x.test/api");
}

#[tokio::test]
async fn native_send_reports_unavailable_transport() {
    let transport = BrowserTransport::new("http://localhost:3001/api");
    assert_eq!(transport.base_url(), "http://localhost:3001/api");
    let result = transport.send(ApiRequest::get("/hotels")).await;
    assert_eq!(result, Err(TransportError::Unavailable));
}
