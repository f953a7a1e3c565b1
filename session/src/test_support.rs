//! Shared fixtures for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use base64::{Engine as _, engine::general_purpose};

use crate::clock::FixedClock;
use crate::error::TransportError;
use crate::http::{ApiRequest, ApiResponse, HttpClient, Navigator, Transport};
use crate::session::SessionStore;
use crate::store::MemoryTokenStore;

/// Fixed "now" used across tests: 2026-10-16T00:00:00Z.
pub const NOW_SECS: i64 = 1_792_108_800;
pub const NOW_MILLIS: i64 = NOW_SECS * 1000;

/// Build an unsigned `header.payload.signature` token around `payload`.
pub fn encode_token(payload: &serde_json::Value) -> String {
    let header = general_purpose::URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = general_purpose::URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.c2lnbmF0dXJl")
}

pub fn token_for(sub: &str, username: &str, role: &str, exp: i64) -> String {
    encode_token(&serde_json::json!({
        "sub": sub,
        "username": username,
        "role": role,
        "exp": exp,
        "iat": exp - 3600
    }))
}

pub struct Fixture {
    pub tokens: MemoryTokenStore,
    pub clock: Arc<FixedClock>,
    pub session: SessionStore,
}

pub fn fixture() -> Fixture {
    let tokens = MemoryTokenStore::new("token");
    fixture_with(tokens)
}

pub fn fixture_with(tokens: MemoryTokenStore) -> Fixture {
    let clock = Arc::new(FixedClock::new(NOW_MILLIS));
    let session = SessionStore::new(Arc::new(tokens.clone()), clock.clone());
    Fixture { tokens, clock, session }
}

/// Transport double that records requests and replays canned responses.
#[derive(Default)]
pub struct MockTransport {
    pub requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
}

impl MockTransport {
    pub fn respond(&self, status: u16, body: serde_json::Value) {
        let body = if body.is_null() { String::new() } else { body.to_string() };
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse { status, body }));
    }

    pub fn fail(&self, error: TransportError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests.lock().unwrap().last().cloned().expect("no request recorded")
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(ApiResponse { status: 200, body: String::new() }))
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for Arc<MockTransport> {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.as_ref().send(request).await
    }
}

/// Navigator double with a settable location and a redirect log.
pub struct RecordingNavigator {
    pub path: Mutex<String>,
    pub redirects: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        Self { path: Mutex::new(path.to_owned()), redirects: Mutex::new(Vec::new()) }
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.path.lock().unwrap().clone()
    }

    fn redirect(&self, path: &str) {
        self.redirects.lock().unwrap().push(path.to_owned());
        *self.path.lock().unwrap() = path.to_owned();
    }
}

pub struct ClientFixture {
    pub fixture: Fixture,
    pub transport: Arc<MockTransport>,
    pub navigator: Arc<RecordingNavigator>,
    pub client: HttpClient<Arc<MockTransport>>,
}

pub fn client_at(path: &str) -> ClientFixture {
    let fixture = fixture();
    let transport = Arc::new(MockTransport::default());
    let navigator = Arc::new(RecordingNavigator::at(path));
    let client = HttpClient::new(fixture.session.clone(), Arc::clone(&transport), navigator.clone());
    ClientFixture { fixture, transport, navigator, client }
}
