//! Production backend using reqwest.

use std::time::Duration;

use http::{HeaderMap, HeaderValue, Method, header};
use serde_json::Value;
use url::Url;

use crate::client::prepare::{check_status, encode_body, finish};
use crate::client::{AsyncHttpClientBackend, BackendResult, Credentials, TransportError};

/// Production backend over a `reqwest::Client`.
///
/// Each call is one request. The status is checked as soon as the
/// response head arrives: 5xx responses are rejected without reading the
/// body. Everything else is read in full, decoded as JSON and passed
/// through the shared response filter.
///
/// # Example
///
/// ```no_run
/// use omi_async_http_client::backend::ReqwestBackend;
/// use omi_async_http_client::client::{AsyncHttpClientBackend, Credentials};
/// use std::time::Duration;
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let backend = ReqwestBackend::new();
/// let url = Url::parse("https://api.example.com/users/1")?;
/// let response = backend
///     .get(&url, None, &http::HeaderMap::new(), &Credentials::None, Duration::from_secs(10))
///     .await?;
/// println!("{}: {}", response.status_code(), response.response());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    inner: reqwest::Client,
}

impl ReqwestBackend {
    /// Creates a backend with reqwest's default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates a backend from an existing reqwest client.
    ///
    /// Useful when you need custom configuration (proxies, TLS, pool limits).
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }

    /// Issues a single request and classifies the response.
    ///
    /// `data` is always serialized, so an absent body is sent as `null`.
    /// `Content-Type: application/json` is added unless `headers` sets one.
    ///
    /// # Errors
    ///
    /// - [`BackendError::Http`](crate::client::BackendError::Http) with 408 on
    ///   timeout, 503 on any other transport failure, the status alone on
    ///   5xx, or the filter's verdict on 4xx
    /// - [`BackendError::Decode`](crate::client::BackendError::Decode) if the
    ///   body is not JSON
    pub async fn request_http(
        &self,
        method: Method,
        url: &Url,
        data: Option<&Value>,
        headers: &HeaderMap,
        auth: &Credentials,
        timeout: Duration,
    ) -> BackendResult {
        tracing::debug!(%method, %url, "Sending request");

        let mut headers = headers.clone();
        if !headers.contains_key(header::CONTENT_TYPE) {
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
        }

        let mut builder = self
            .inner
            .request(method.clone(), url.as_str())
            .headers(headers)
            .body(encode_body(data))
            .timeout(timeout);

        if let Some(auth) = auth.normalize() {
            builder = builder.basic_auth(auth.username(), Some(auth.password()));
        }

        let response = builder.send().await.map_err(|e| {
            let err = map_transport_error(e);
            tracing::warn!(%method, %url, "Transport failure: {err}");
            err
        })?;

        let status = response.status();
        tracing::debug!(%method, %url, status = status.as_u16(), "Received response");

        // Dropping the response here releases the connection unread.
        check_status(status)?;

        let body = response.bytes().await.map_err(map_transport_error)?;

        finish(status, &body)
    }
}

impl Default for ReqwestBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl AsyncHttpClientBackend for ReqwestBackend {
    async fn head(
        &self,
        url: &Url,
        _data: Option<&Value>,
        headers: &HeaderMap,
        auth: &Credentials,
        timeout: Duration,
    ) -> BackendResult {
        self.request_http(Method::HEAD, url, None, headers, auth, timeout)
            .await
    }

    async fn get(
        &self,
        url: &Url,
        _data: Option<&Value>,
        headers: &HeaderMap,
        auth: &Credentials,
        timeout: Duration,
    ) -> BackendResult {
        self.request_http(Method::GET, url, None, headers, auth, timeout)
            .await
    }

    async fn put(
        &self,
        url: &Url,
        data: Option<&Value>,
        headers: &HeaderMap,
        auth: &Credentials,
        timeout: Duration,
    ) -> BackendResult {
        self.request_http(Method::PUT, url, data, headers, auth, timeout)
            .await
    }

    async fn post(
        &self,
        url: &Url,
        data: Option<&Value>,
        headers: &HeaderMap,
        auth: &Credentials,
        timeout: Duration,
    ) -> BackendResult {
        self.request_http(Method::POST, url, data, headers, auth, timeout)
            .await
    }

    async fn delete(
        &self,
        url: &Url,
        data: Option<&Value>,
        headers: &HeaderMap,
        auth: &Credentials,
        timeout: Duration,
    ) -> BackendResult {
        self.request_http(Method::DELETE, url, data, headers, auth, timeout)
            .await
    }
}

fn map_transport_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout(Box::new(e))
    } else {
        TransportError::Connection(Box::new(e))
    }
}
