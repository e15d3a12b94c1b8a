//! Transport adapters implementing [`AsyncHttpClientBackend`](crate::client::AsyncHttpClientBackend).
//!
//! - [`ReqwestBackend`]: production backend over `reqwest`
//! - [`MockTestClientBackend`]: drives a synchronous [`TestClient`](crate::mock::TestClient)
//!
//! Both share the status check and response filter in [`crate::client::prepare`].

mod mock_backend;
mod reqwest_backend;


pub use mock_backend::MockTestClientBackend;
pub use reqwest_backend::ReqwestBackend;
