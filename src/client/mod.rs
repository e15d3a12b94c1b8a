//! Transport-independent client layer.
//!
//! This module provides:
//! - The backend contract ([`AsyncHttpClientBackend`])
//! - Outcome types ([`ClientBackendResponse`], [`HttpException`], [`BackendError`])
//! - Credential normalization ([`Credentials`], [`BasicAuth`])
//! - The shared response filter ([`filter_received_response`])
//! - Response preparation steps used by every backend ([`prepare`])
//! - A base-URL bound client ([`ApiClient`])

mod api;
mod auth;
mod backend;
mod error;
mod filter;
pub mod prepare;
mod response;

#[cfg(test)]
mod auth_tests;

pub use api::{ApiClient, DEFAULT_TIMEOUT};
pub use auth::{BasicAuth, Credentials, PASSWORD_KEY, USERNAME_KEY};
pub use backend::{AsyncHttpClientBackend, BackendResult};
pub use error::{BackendError, Detail, HttpException, TransportError};
pub use filter::{
    ACCEPTED_SUCCESSES, TRACE_CODE_FIELD, TRACED_CLIENT_ERRORS, filter_received_response,
    trace_code,
};
pub use response::ClientBackendResponse;
