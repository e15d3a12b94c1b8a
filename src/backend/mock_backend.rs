//! Backend over a synchronous in-process test transport.

use std::sync::Arc;
use std::time::Duration;

use http::{HeaderMap, Method};
use serde_json::Value;
use url::Url;

use crate::client::prepare::{check_status, encode_body, finish};
use crate::client::{AsyncHttpClientBackend, BackendResult, Credentials, TransportError};
use crate::mock::{TestClient, TestRequest};

/// Backend that drives a [`TestClient`] instead of the network.
///
/// Each synchronous call runs on Tokio's blocking pool so the async
/// contract holds, and its result goes through the same status check and
/// response filter as [`ReqwestBackend`](super::ReqwestBackend).
///
/// HEAD sends no body; GET sends `null`; PUT, POST and DELETE send the
/// serialized `data`.
///
/// GET ignores `data` on purpose, so a GET looks the same here as through
/// [`ReqwestBackend`](super::ReqwestBackend). Do not forward it.
///
/// # Example
///
/// ```
/// use omi_async_http_client::backend::MockTestClientBackend;
/// use omi_async_http_client::mock::{Router, TestResponse};
/// use http::{Method, StatusCode};
/// use serde_json::json;
///
/// let backend = MockTestClientBackend::new(Router::new().respond(
///     Method::GET,
///     "/ping",
///     TestResponse::json(StatusCode::OK, &json!({"pong": true})),
/// ));
/// ```
#[derive(Debug)]
pub struct MockTestClientBackend<C> {
    client: Arc<C>,
}

impl<C> Clone for MockTestClientBackend<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<C: TestClient> MockTestClientBackend<C> {
    #[must_use]
    pub fn new(client: C) -> Self {
        Self::from_arc(Arc::new(client))
    }

    /// Creates a backend sharing an existing client, so the test can keep
    /// a handle for assertions.
    #[must_use]
    pub const fn from_arc(client: Arc<C>) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn client(&self) -> &C {
        &self.client
    }

    async fn dispatch(&self, request: TestRequest) -> BackendResult {
        let method = request.method.clone();
        let url = request.url.clone();
        tracing::debug!(%method, %url, "Dispatching to test client");

        let client = Arc::clone(&self.client);
        let response = tokio::task::spawn_blocking(move || client.request(request))
            .await
            .map_err(|e| TransportError::Connection(Box::new(e)))?
            .inspect_err(|err| tracing::warn!(%method, %url, "Transport failure: {err}"))?;

        tracing::debug!(%method, %url, status = response.status.as_u16(), "Received response");

        check_status(response.status)?;
        finish(response.status, &response.body)
    }

    fn build(
        method: Method,
        url: &Url,
        body: Option<Vec<u8>>,
        headers: &HeaderMap,
        auth: &Credentials,
        timeout: Duration,
    ) -> TestRequest {
        let request = TestRequest::new(method, url.clone())
            .with_headers(headers.clone())
            .with_auth(auth.normalize())
            .with_timeout(timeout);
        match body {
            Some(body) => request.with_body(body),
            None => request,
        }
    }
}

impl<C: TestClient> AsyncHttpClientBackend for MockTestClientBackend<C> {
    async fn head(
        &self,
        url: &Url,
        _data: Option<&Value>,
        headers: &HeaderMap,
        auth: &Credentials,
        timeout: Duration,
    ) -> BackendResult {
        let request = Self::build(Method::HEAD, url, None, headers, auth, timeout);
        self.dispatch(request).await
    }

    async fn get(
        &self,
        url: &Url,
        _data: Option<&Value>,
        headers: &HeaderMap,
        auth: &Credentials,
        timeout: Duration,
    ) -> BackendResult {
        let body = Some(encode_body(None));
        let request = Self::build(Method::GET, url, body, headers, auth, timeout);
        self.dispatch(request).await
    }

    async fn put(
        &self,
        url: &Url,
        data: Option<&Value>,
        headers: &HeaderMap,
        auth: &Credentials,
        timeout: Duration,
    ) -> BackendResult {
        let body = Some(encode_body(data));
        let request = Self::build(Method::PUT, url, body, headers, auth, timeout);
        self.dispatch(request).await
    }

    async fn post(
        &self,
        url: &Url,
        data: Option<&Value>,
        headers: &HeaderMap,
        auth: &Credentials,
        timeout: Duration,
    ) -> BackendResult {
        let body = Some(encode_body(data));
        let request = Self::build(Method::POST, url, body, headers, auth, timeout);
        self.dispatch(request).await
    }

    async fn delete(
        &self,
        url: &Url,
        data: Option<&Value>,
        headers: &HeaderMap,
        auth: &Credentials,
        timeout: Duration,
    ) -> BackendResult {
        let body = Some(encode_body(data));
        let request = Self::build(Method::DELETE, url, body, headers, auth, timeout);
        self.dispatch(request).await
    }
}
