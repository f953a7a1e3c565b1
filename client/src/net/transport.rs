//! Browser fetch transport for the REST pipeline.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every send fails with `TransportError::Unavailable`, so
//! the crate still builds and unit-tests without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Only failures below HTTP are errors here. Status codes, including 401,
//! are returned as-is for `session::HttpClient` to interpret.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use session::{ApiRequest, ApiResponse, Transport, TransportError};

/// Sends requests to `base_url` + request path.
#[derive(Clone, Debug)]
pub struct BrowserTransport {
    base_url: String,
}

impl BrowserTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn request_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if path.is_empty() {
        return base.to_owned();
    }
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;
            use session::Method;

            let url = request_url(&self.base_url, &request.path);
            let mut builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Patch => Request::patch(&url),
                Method::Delete => Request::delete(&url),
            };
            if !request.query.is_empty() {
                builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            }
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let built = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError::Request(e.to_string()))?;

            let response = built
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request_url(&self.base_url, &request.path), request);
            Err(TransportError::Unavailable)
        }
    }
}
