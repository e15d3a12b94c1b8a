//! Response preparation steps shared by the backends.
//!
//! A backend calls [`check_status`] as soon as the status is known, reads
//! the body only if that passed, then calls [`finish`] with the raw bytes.

use http::StatusCode;
use serde_json::Value;

use super::error::{BackendError, HttpException};
use super::filter::filter_received_response;
use super::response::ClientBackendResponse;
use crate::status;

/// Rejects server errors before the body is touched.
///
/// 5xx bodies are not trusted to be JSON, so the resulting exception
/// carries the status only. Client errors pass here; they are classified
/// after decoding.
///
/// # Errors
///
/// Returns [`HttpException`] with no detail for any 5xx status.
pub fn check_status(status_code: StatusCode) -> Result<(), HttpException> {
    if status::is_server_error(status_code) {
        return Err(HttpException::new(status_code));
    }
    Ok(())
}

/// Decodes a response body as JSON. An empty body decodes to `null`.
///
/// # Errors
///
/// Returns [`BackendError::Decode`] if the bytes are not valid JSON.
pub fn decode_body(status_code: StatusCode, body: &[u8]) -> Result<Value, BackendError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|source| BackendError::Decode {
        status: status_code,
        source,
    })
}

/// Decodes the body, applies the response filter and builds the response.
///
/// # Errors
///
/// Returns [`BackendError::Decode`] for a non-JSON body, or
/// [`BackendError::Http`] if the filter rejects the response.
pub fn finish(status_code: StatusCode, body: &[u8]) -> Result<ClientBackendResponse, BackendError> {
    let response = decode_body(status_code, body)?;
    filter_received_response(status_code, &response)?;
    Ok(ClientBackendResponse::new(status_code, response))
}

/// Serializes request data the way every backend sends it.
///
/// Absent data is serialized as `null` rather than omitted.
#[must_use]
pub fn encode_body(data: Option<&Value>) -> Vec<u8> {
    // Serializing a `Value` into memory cannot fail.
    serde_json::to_vec(&data).unwrap_or_else(|_| b"null".to_vec())
}
