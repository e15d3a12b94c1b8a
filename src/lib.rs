//! omi-async-http-client: backend-agnostic async HTTP client
//!
//! A small client layer for JSON APIs. Application code is written against
//! the [`AsyncHttpClientBackend`](client::AsyncHttpClientBackend) contract
//! and runs unchanged over the production transport
//! ([`ReqwestBackend`](backend::ReqwestBackend)) or an in-process test
//! transport ([`MockTestClientBackend`](backend::MockTestClientBackend)).
//!
//! Every backend applies the same response rules: transport faults become
//! 408 / 503, any 5xx is rejected before the body is read, and decoded
//! bodies pass through a shared response filter.

pub mod backend;
pub mod client;
pub mod config;
pub mod mock;
pub mod status;
