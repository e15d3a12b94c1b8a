//! Resource-oriented client on top of a backend.

use std::time::Duration;

use http::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use url::Url;

use super::backend::{AsyncHttpClientBackend, BackendResult};
use super::{BackendError, Credentials};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client bound to one remote API.
///
/// Holds the base URL, headers, credentials and timeout shared by every
/// request, and resolves relative paths against the base URL.
///
/// # Example
///
/// ```
/// use omi_async_http_client::backend::ReqwestBackend;
/// use omi_async_http_client::client::{ApiClient, BasicAuth};
/// use std::time::Duration;
/// use url::Url;
///
/// let client = ApiClient::new(
///     ReqwestBackend::new(),
///     Url::parse("https://api.example.com/v1").unwrap(),
/// )
/// .with_credentials(BasicAuth::new("user", "secret"))
/// .with_timeout(Duration::from_secs(10));
///
/// assert_eq!(client.base_url().as_str(), "https://api.example.com/v1/");
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient<B> {
    backend: B,
    base_url: Url,
    headers: HeaderMap,
    credentials: Credentials,
    timeout: Duration,
}

impl<B> ApiClient<B> {
    /// Creates a client with no headers, no credentials and the default timeout.
    ///
    /// A trailing `/` is appended to the base path so relative paths are
    /// resolved beneath it.
    #[must_use]
    pub fn new(backend: B, mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            backend,
            base_url,
            headers: HeaderMap::new(),
            credentials: Credentials::None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replaces the headers sent with every request.
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Adds one header, keeping any existing values for the same name.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    #[must_use]
    pub fn with_credentials(mut self, credentials: impl Into<Credentials>) -> Self {
        self.credentials = credentials.into();
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Resolves `path` against the base URL. A leading `/` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::InvalidPath`] if the joined URL is invalid.
    pub fn resolve(&self, path: &str) -> Result<Url, BackendError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|source| BackendError::InvalidPath {
                path: path.to_string(),
                source,
            })
    }
}

impl<B: AsyncHttpClientBackend> ApiClient<B> {
    /// See [`AsyncHttpClientBackend::send`].
    ///
    /// # Errors
    ///
    /// Always fails; the operation is reserved.
    pub async fn send(&self, path: &str, data: Option<&Value>) -> BackendResult {
        let url = self.resolve(path)?;
        self.backend
            .send(&url, data, &self.headers, &self.credentials, self.timeout)
            .await
    }

    /// Issues a HEAD request for `path`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] on an invalid path, transport failure, or a
    /// rejected response.
    pub async fn head(&self, path: &str) -> BackendResult {
        let url = self.resolve(path)?;
        self.backend
            .head(&url, None, &self.headers, &self.credentials, self.timeout)
            .await
    }

    /// Issues a GET request for `path`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] on an invalid path, transport failure, or a
    /// rejected response.
    pub async fn get(&self, path: &str) -> BackendResult {
        let url = self.resolve(path)?;
        self.backend
            .get(&url, None, &self.headers, &self.credentials, self.timeout)
            .await
    }

    /// Issues a PUT request for `path` with `data` as the body.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] on an invalid path, transport failure, or a
    /// rejected response.
    pub async fn put(&self, path: &str, data: Option<&Value>) -> BackendResult {
        let url = self.resolve(path)?;
        self.backend
            .put(&url, data, &self.headers, &self.credentials, self.timeout)
            .await
    }

    /// Issues a POST request for `path` with `data` as the body.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] on an invalid path, transport failure, or a
    /// rejected response.
    pub async fn post(&self, path: &str, data: Option<&Value>) -> BackendResult {
        let url = self.resolve(path)?;
        self.backend
            .post(&url, data, &self.headers, &self.credentials, self.timeout)
            .await
    }

    /// Issues a DELETE request for `path` with `data` as the body.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] on an invalid path, transport failure, or a
    /// rejected response.
    pub async fn delete(&self, path: &str, data: Option<&Value>) -> BackendResult {
        let url = self.resolve(path)?;
        self.backend
            .delete(&url, data, &self.headers, &self.credentials, self.timeout)
            .await
    }
}
