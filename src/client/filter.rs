//! Response classification shared by all backends.
//!
//! Every backend feeds `(status, decoded body)` through
//! [`filter_received_response`] before handing a response to the caller.
//! The decision table, in priority order:
//!
//! | Status | Outcome |
//! |---|---|
//! | 400, 401, 403, 404, 409 | error; `trace_code` from the body's `code` field, detail is the reason phrase |
//! | 422 | error; detail is the raw body |
//! | 200, 201, 202 | pass |
//! | anything else | pass |

use http::StatusCode;
use serde_json::Value;

use super::error::{Detail, HttpException};
use crate::status;

/// Client errors that are always turned into an [`HttpException`].
pub const TRACED_CLIENT_ERRORS: [StatusCode; 5] = [
    status::BAD_REQUEST,
    status::UNAUTHORIZED,
    status::FORBIDDEN,
    status::NOT_FOUND,
    status::CONFLICT,
];

/// Success codes the filter recognizes explicitly.
pub const ACCEPTED_SUCCESSES: [StatusCode; 3] = [status::OK, status::CREATED, status::ACCEPTED];

/// Body field holding the business error code.
pub const TRACE_CODE_FIELD: &str = "code";

/// Classifies a received response.
///
/// Pure function: the same input always yields the same outcome.
///
/// # Errors
///
/// Returns [`HttpException`] for the statuses listed in
/// [`TRACED_CLIENT_ERRORS`] and for `422 Unprocessable Entity`.
pub fn filter_received_response(status_code: StatusCode, body: &Value) -> Result<(), HttpException> {
    if TRACED_CLIENT_ERRORS.contains(&status_code) {
        let reason = Detail::Text(status::reason_phrase(status_code).to_string());
        return Err(HttpException::new(status_code)
            .with_trace_code(trace_code(body))
            .with_detail(reason));
    }

    if status_code == status::UNPROCESSABLE_ENTITY {
        return Err(HttpException::new(status_code).with_detail(Detail::Body(body.clone())));
    }

    if ACCEPTED_SUCCESSES.contains(&status_code) {
        return Ok(());
    }

    // Unlisted statuses pass through and are left to the caller.
    // TODO: map the remaining 3xx/4xx codes once the target API documents them.
    Ok(())
}

/// Reads the business trace code from a response body.
///
/// Returns 0 when the body is not an object, the field is missing, or the
/// field is not a positive integer.
#[must_use]
pub fn trace_code(body: &Value) -> u64 {
    body.get(TRACE_CODE_FIELD)
        .and_then(Value::as_u64)
        .unwrap_or(0)
}
