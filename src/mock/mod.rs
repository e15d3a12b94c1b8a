//! In-process test transport.
//!
//! This module provides:
//! - Request and response values ([`TestRequest`], [`TestResponse`])
//! - The synchronous transport trait ([`TestClient`])
//! - A route-table implementation ([`Router`])
//!
//! Pair these with [`MockTestClientBackend`](crate::backend::MockTestClientBackend)
//! to run code written against the backend contract without a server.

mod router;
mod transport;

#[cfg(test)]
mod transport_tests;

pub use router::Router;
pub use transport::{TestClient, TestRequest, TestResponse};
