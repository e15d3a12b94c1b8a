//! Status-code lookup service.
//!
//! A thin layer over [`http::StatusCode`] giving the classification and
//! reason-phrase queries the response filter depends on, plus the named
//! codes it branches on.

pub use http::StatusCode;

pub const OK: StatusCode = StatusCode::OK;
pub const CREATED: StatusCode = StatusCode::CREATED;
pub const ACCEPTED: StatusCode = StatusCode::ACCEPTED;
pub const BAD_REQUEST: StatusCode = StatusCode::BAD_REQUEST;
pub const UNAUTHORIZED: StatusCode = StatusCode::UNAUTHORIZED;
pub const FORBIDDEN: StatusCode = StatusCode::FORBIDDEN;
pub const NOT_FOUND: StatusCode = StatusCode::NOT_FOUND;
pub const REQUEST_TIMEOUT: StatusCode = StatusCode::REQUEST_TIMEOUT;
pub const CONFLICT: StatusCode = StatusCode::CONFLICT;
pub const UNPROCESSABLE_ENTITY: StatusCode = StatusCode::UNPROCESSABLE_ENTITY;
pub const SERVICE_UNAVAILABLE: StatusCode = StatusCode::SERVICE_UNAVAILABLE;

/// Returns true for 5xx codes.
#[must_use]
pub fn is_server_error(status: StatusCode) -> bool {
    status.is_server_error()
}

/// Returns true for 4xx codes.
#[must_use]
pub fn is_client_error(status: StatusCode) -> bool {
    status.is_client_error()
}

/// Returns the canonical reason phrase, or an empty string for
/// codes without one (e.g. 599).
#[must_use]
pub fn reason_phrase(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("")
}
