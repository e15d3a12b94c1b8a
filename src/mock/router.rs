//! Route table implementing [`TestClient`].

use std::fmt;
use std::sync::{Mutex, PoisonError};

use http::{Method, StatusCode};
use serde_json::json;

use super::{TestClient, TestRequest, TestResponse};
use crate::client::TransportError;

type Handler = Box<dyn Fn(&TestRequest) -> Result<TestResponse, TransportError> + Send + Sync>;

struct Route {
    method: Method,
    path: String,
    handler: Handler,
}

/// In-process stand-in for a remote API.
///
/// Routes match on method and URL path (the query string is ignored).
/// Requests without a matching route get `404 {"detail": "Not Found"}`.
/// Every request is recorded and can be inspected with [`requests`](Self::requests).
///
/// # Example
///
/// ```
/// use http::{Method, StatusCode};
/// use omi_async_http_client::mock::{Router, TestResponse};
/// use serde_json::json;
///
/// let router = Router::new()
///     .respond(Method::GET, "/users/1", TestResponse::json(StatusCode::OK, &json!({"id": 1})))
///     .route(Method::POST, "/users", |req| {
///         Ok(TestResponse::json(StatusCode::CREATED, &req.json().unwrap_or_default()))
///     });
/// ```
#[derive(Default)]
pub struct Router {
    routes: Vec<Route>,
    received: Mutex<Vec<TestRequest>>,
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler. Later registrations for the same route shadow
    /// earlier ones.
    #[must_use]
    pub fn route<F>(mut self, method: Method, path: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&TestRequest) -> Result<TestResponse, TransportError> + Send + Sync + 'static,
    {
        self.routes.push(Route {
            method,
            path: path.into(),
            handler: Box::new(handler),
        });
        self
    }

    /// Registers a route that always answers with `response`.
    #[must_use]
    pub fn respond(self, method: Method, path: impl Into<String>, response: TestResponse) -> Self {
        self.route(method, path, move |_| Ok(response.clone()))
    }

    /// Returns every request received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<TestRequest> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn find(&self, method: &Method, path: &str) -> Option<&Route> {
        self.routes
            .iter()
            .rev()
            .find(|route| route.method == *method && route.path == path)
    }
}

impl TestClient for Router {
    fn request(&self, req: TestRequest) -> Result<TestResponse, TransportError> {
        let result = match self.find(&req.method, req.url.path()) {
            Some(route) => (route.handler)(&req),
            None => Ok(TestResponse::json(
                StatusCode::NOT_FOUND,
                &json!({"detail": "Not Found"}),
            )),
        };

        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(req);

        result
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let routes: Vec<String> = self
            .routes
            .iter()
            .map(|route| format!("{} {}", route.method, route.path))
            .collect();
        f.debug_struct("Router").field("routes", &routes).finish_non_exhaustive()
    }
}
