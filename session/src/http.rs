//! Authenticated request pipeline shared by every backend call.
//!
//! SYSTEM CONTEXT
//! ==============
//! Request stage: the stored bearer token, if any, is attached as an
//! `Authorization` header. Response stage: a 401 outside the login flow ends
//! the session through [`SessionStore::logout`] and sends the browser to the
//! login view. Every other failure is handed back to the caller untouched.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, TransportError};
use crate::guard::{LOGIN_PATH, REGISTER_PATH};
use crate::session::SessionStore;

/// Path fragment identifying the credential exchange endpoint.
const LOGIN_ENDPOINT: &str = "/auth/login";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A backend request relative to the API base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the API base, e.g. `/hotels/42`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), headers: Vec::new(), body: None }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    #[must_use]
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Request`] if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, TransportError> {
        let value = serde_json::to_value(body).map_err(|e| TransportError::Request(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    #[must_use]
    pub fn query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    fn is_login(&self) -> bool {
        self.path.contains(LOGIN_ENDPOINT)
    }
}

/// Raw response: status plus body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns the raw response.
///
/// Futures are not `Send`; browser fetch runs on the single UI thread.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Access to the browser location for the unauthorized redirect.
pub trait Navigator: Send + Sync {
    fn current_path(&self) -> String;
    /// Hard navigation to `path`.
    fn redirect(&self, path: &str);
}

/// The configured request pipeline.
#[derive(Clone)]
pub struct HttpClient<T> {
    session: SessionStore,
    transport: T,
    navigator: Arc<dyn Navigator>,
}

impl<T: Transport> HttpClient<T> {
    pub fn new(session: SessionStore, transport: T, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, transport, navigator }
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Send a request and decode the JSON response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, or a body
    /// that does not decode as `R`.
    pub async fn send_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let response = self.execute(request).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Body(e.to_string()))
    }

    /// Send a request whose success body is irrelevant; returns the raw body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-2xx status.
    pub async fn send_empty(&self, request: ApiRequest) -> Result<String, ApiError> {
        Ok(self.execute(request).await?.body)
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let request = self.authorize(request);
        let is_login = request.is_login();
        let method = request.method;
        let path = request.path.clone();

        let response = self.transport.send(request).await?;
        if response.status == 401 {
            self.on_unauthorized(is_login, &path);
        }
        if !response.is_success() {
            log::debug!("{} {path} -> {}", method.as_str(), response.status);
            return Err(ApiError::from_status(response.status, &response.body));
        }
        Ok(response)
    }

    /// Attach the stored bearer token, if one exists.
    fn authorize(&self, mut request: ApiRequest) -> ApiRequest {
        if let Some(token) = self.session.token_store().get() {
            request.headers.retain(|(k, _)| !k.eq_ignore_ascii_case("authorization"));
            request.headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        request
    }

    fn on_unauthorized(&self, is_login: bool, path: &str) {
        let location = self.navigator.current_path();
        if is_login || location == LOGIN_PATH || location == REGISTER_PATH {
            return;
        }
        log::warn!("unauthorized response from {path}; session ended");
        self.session.logout();
        self.navigator.redirect(LOGIN_PATH);
    }
}
