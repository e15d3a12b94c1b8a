//! Synchronous test transport: request/response types and client trait.

use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::client::{BasicAuth, TransportError};

/// A request handed to a [`TestClient`].
///
/// Uses standard `http` crate types for method and headers, so handlers
/// can inspect it the same way a server framework would.
#[derive(Debug, Clone)]
pub struct TestRequest {
    /// HTTP method
    pub method: http::Method,
    /// Target URL
    pub url: Url,
    /// HTTP headers
    pub headers: http::HeaderMap,
    /// Serialized request body; `None` for HEAD
    pub body: Option<Vec<u8>>,
    /// Normalized credentials
    pub auth: Option<BasicAuth>,
    /// Timeout requested by the caller
    pub timeout: Duration,
}

impl TestRequest {
    /// Creates a request with no headers, body or credentials and a zero timeout.
    #[must_use]
    pub fn new(method: http::Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
            auth: None,
            timeout: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: http::HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    #[must_use]
    pub fn with_auth(mut self, auth: Option<BasicAuth>) -> Self {
        self.auth = auth;
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Parses the body as JSON. Returns `None` when there is no body or it
    /// is not valid JSON.
    #[must_use]
    pub fn json(&self) -> Option<Value> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_slice(body).ok())
    }
}

/// A response produced by a [`TestClient`].
///
/// The body is fully buffered.
#[derive(Debug, Clone)]
pub struct TestResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Response body
    pub body: Vec<u8>,
}

impl TestResponse {
    #[must_use]
    pub const fn new(status: http::StatusCode, headers: http::HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Creates a response with a JSON body and `Content-Type: application/json`.
    #[must_use]
    pub fn json(status: http::StatusCode, body: &Value) -> Self {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        Self::new(status, headers, body.to_string().into_bytes())
    }

    /// Creates a response with an arbitrary body and no headers.
    #[must_use]
    pub fn raw(status: http::StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self::new(status, http::HeaderMap::new(), body.into())
    }

    /// Returns the body as a UTF-8 string, if valid.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Synchronous, in-process transport used by
/// [`MockTestClientBackend`](crate::backend::MockTestClientBackend).
///
/// # Design
///
/// Implementations run on a blocking worker thread, so they may block
/// freely. They report failures through [`TransportError`] exactly like a
/// network transport would, which lets tests exercise the timeout and
/// connection-failure paths without a network.
///
/// # Example
///
/// ```
/// use omi_async_http_client::client::TransportError;
/// use omi_async_http_client::mock::{TestClient, TestRequest, TestResponse};
///
/// struct Teapot;
///
/// impl TestClient for Teapot {
///     fn request(&self, _req: TestRequest) -> Result<TestResponse, TransportError> {
///         Ok(TestResponse::raw(http::StatusCode::IM_A_TEAPOT, "{}"))
///     }
/// }
/// ```
pub trait TestClient: Send + Sync + 'static {
    /// Handles one request.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] to simulate a transport failure.
    fn request(&self, req: TestRequest) -> Result<TestResponse, TransportError>;
}
