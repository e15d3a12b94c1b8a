//! Normalized response returned by backends.

use http::StatusCode;
use serde_json::Value;

/// A response that passed the response filter.
///
/// The body is the decoded JSON document exactly as the server sent it.
/// Object keys keep their wire order.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientBackendResponse {
    status_code: StatusCode,
    response: Value,
}

impl ClientBackendResponse {
    #[must_use]
    pub const fn new(status_code: StatusCode, response: Value) -> Self {
        Self {
            status_code,
            response,
        }
    }

    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        self.status_code
    }

    /// Returns the decoded body.
    #[must_use]
    pub const fn response(&self) -> &Value {
        &self.response
    }

    /// Consumes the response and returns the decoded body.
    #[must_use]
    pub fn into_response(self) -> Value {
        self.response
    }
}
