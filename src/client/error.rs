//! Error types for backend operations.

use std::fmt;

use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::status;

/// Error raised by a transport before any status line was received.
///
/// Only two categories matter to callers: the request ran out of time,
/// or it failed for some other low-level reason.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The transport gave up waiting for the server.
    #[error("{0}")]
    Timeout(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Connection refused, DNS failure, protocol error, a request that
    /// could not be built, and the like.
    #[error("{0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Collapses the transport fault into the HTTP-shaped error callers see.
    ///
    /// Timeouts become `408 Request Timeout`; everything else becomes
    /// `503 Service Unavailable`. The detail is the underlying error text,
    /// unprefixed.
    #[must_use]
    pub fn into_exception(self) -> HttpException {
        let status_code = match self {
            Self::Timeout(_) => status::REQUEST_TIMEOUT,
            Self::Connection(_) => status::SERVICE_UNAVAILABLE,
        };
        HttpException::new(status_code).with_detail(Detail::Text(self.to_string()))
    }
}

/// Payload carried in [`HttpException::detail`].
#[derive(Debug, Clone, PartialEq)]
pub enum Detail {
    /// Human-readable reason (usually the status reason phrase).
    Text(String),
    /// Raw response body, kept as-is (validation payloads).
    Body(Value),
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Body(body) => write!(f, "{body}"),
        }
    }
}

/// HTTP-level failure of a single request.
///
/// Callers branch on [`status_code`](Self::status_code) for protocol-level
/// outcomes, or on [`trace_code`](Self::trace_code) for business errors
/// reported by the remote API.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("HTTP {}: {}", .status_code.as_u16(), self.detail_text())]
pub struct HttpException {
    status_code: StatusCode,
    detail: Option<Detail>,
    trace_code: Option<u64>,
}

impl HttpException {
    /// Creates an exception with only a status code.
    #[must_use]
    pub const fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            detail: None,
            trace_code: None,
        }
    }

    /// Sets the detail payload.
    #[must_use]
    pub fn with_detail(mut self, detail: Detail) -> Self {
        self.detail = Some(detail);
        self
    }

    /// Sets the business trace code. Zero means "no trace code" and is ignored.
    #[must_use]
    pub const fn with_trace_code(mut self, trace_code: u64) -> Self {
        self.trace_code = if trace_code > 0 {
            Some(trace_code)
        } else {
            None
        };
        self
    }

    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        self.status_code
    }

    #[must_use]
    pub const fn detail(&self) -> Option<&Detail> {
        self.detail.as_ref()
    }

    #[must_use]
    pub const fn trace_code(&self) -> Option<u64> {
        self.trace_code
    }

    /// Returns the detail as text, falling back to the reason phrase
    /// when no detail was attached.
    #[must_use]
    pub fn detail_text(&self) -> String {
        self.detail.as_ref().map_or_else(
            || status::reason_phrase(self.status_code).to_string(),
            ToString::to_string,
        )
    }
}

impl From<TransportError> for HttpException {
    fn from(err: TransportError) -> Self {
        err.into_exception()
    }
}

/// Error returned by every [`AsyncHttpClientBackend`](super::AsyncHttpClientBackend) method.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The operation is reserved in the contract but has no implementation.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    /// The request failed with an HTTP-shaped error.
    #[error(transparent)]
    Http(#[from] HttpException),

    /// A request path could not be resolved against the base URL.
    #[error("Invalid request path '{path}': {source}")]
    InvalidPath {
        /// The path as given
        path: String,
        /// Underlying URL parse error
        #[source]
        source: url::ParseError,
    },

    /// The response body could not be decoded as JSON.
    #[error("Failed to decode response body (status {}): {source}", .status.as_u16())]
    Decode {
        /// Status of the response whose body failed to decode
        status: StatusCode,
        /// Underlying codec error
        #[source]
        source: serde_json::Error,
    },
}

impl BackendError {
    /// Returns the HTTP exception, if this is one.
    #[must_use]
    pub const fn as_http(&self) -> Option<&HttpException> {
        match self {
            Self::Http(exc) => Some(exc),
            _ => None,
        }
    }

    /// Returns the status code associated with the failure, if any.
    #[must_use]
    pub const fn status_code(&self) -> Option<StatusCode> {
        match self {
            Self::Http(exc) => Some(exc.status_code),
            Self::Decode { status, .. } => Some(*status),
            Self::NotImplemented(_) | Self::InvalidPath { .. } => None,
        }
    }
}

impl From<TransportError> for BackendError {
    fn from(err: TransportError) -> Self {
        Self::Http(err.into_exception())
    }
}
