//! The backend contract.

use std::future::Future;
use std::time::Duration;

use http::HeaderMap;
use serde_json::Value;
use url::Url;

use super::{BackendError, ClientBackendResponse, Credentials};

/// Result of a single backend request.
pub type BackendResult = Result<ClientBackendResponse, BackendError>;

/// Capability set every transport adapter provides.
///
/// Each method issues exactly one request and returns either a response
/// that passed the shared response filter or a typed [`BackendError`].
/// Nothing is retried.
///
/// # Design
///
/// Implementations differ only in how they reach the server; status
/// handling goes through [`super::prepare`] so that all backends classify
/// responses identically.
///
/// # Example
///
/// ```ignore
/// use omi_async_http_client::client::{AsyncHttpClientBackend, Credentials};
///
/// let response = backend
///     .get(&url, None, &HeaderMap::new(), &Credentials::None, Duration::from_secs(5))
///     .await?;
/// println!("{}", response.response());
/// ```
pub trait AsyncHttpClientBackend: Send + Sync {
    /// Reserved for a future generic verb.
    ///
    /// # Errors
    ///
    /// Always returns [`BackendError::NotImplemented`].
    fn send(
        &self,
        _url: &Url,
        _data: Option<&Value>,
        _headers: &HeaderMap,
        _auth: &Credentials,
        _timeout: Duration,
    ) -> impl Future<Output = BackendResult> + Send {
        async { Err(BackendError::NotImplemented("send")) }
    }

    /// Issues a HEAD request. `data` is accepted but never sent.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] on transport failure or a rejected response.
    fn head(
        &self,
        url: &Url,
        data: Option<&Value>,
        headers: &HeaderMap,
        auth: &Credentials,
        timeout: Duration,
    ) -> impl Future<Output = BackendResult> + Send;

    /// Issues a GET request. `data` is accepted but never sent.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] on transport failure or a rejected response.
    fn get(
        &self,
        url: &Url,
        data: Option<&Value>,
        headers: &HeaderMap,
        auth: &Credentials,
        timeout: Duration,
    ) -> impl Future<Output = BackendResult> + Send;

    /// Issues a PUT request with `data` as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] on transport failure or a rejected response.
    fn put(
        &self,
        url: &Url,
        data: Option<&Value>,
        headers: &HeaderMap,
        auth: &Credentials,
        timeout: Duration,
    ) -> impl Future<Output = BackendResult> + Send;

    /// Issues a POST request with `data` as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] on transport failure or a rejected response.
    fn post(
        &self,
        url: &Url,
        data: Option<&Value>,
        headers: &HeaderMap,
        auth: &Credentials,
        timeout: Duration,
    ) -> impl Future<Output = BackendResult> + Send;

    /// Issues a DELETE request with `data` as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] on transport failure or a rejected response.
    fn delete(
        &self,
        url: &Url,
        data: Option<&Value>,
        headers: &HeaderMap,
        auth: &Credentials,
        timeout: Duration,
    ) -> impl Future<Output = BackendResult> + Send;
}
