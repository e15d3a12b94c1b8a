//! Tests for test-transport request/response types.

use std::time::Duration;

use serde_json::json;

use super::{TestClient, TestRequest, TestResponse};
use crate::client::{BasicAuth, TransportError};

fn url() -> url::Url {
    url::Url::parse("https://example.com/api").unwrap()
}

mod test_request {
    use super::*;

    #[test]
    fn new_creates_bare_request() {
        let req = TestRequest::new(http::Method::PUT, url());

        assert_eq!(req.method, http::Method::PUT);
        assert_eq!(req.url, url());
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
        assert!(req.auth.is_none());
        assert_eq!(req.timeout, Duration::ZERO);
    }

    #[test]
    fn builder_pattern_chains_correctly() {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::ACCEPT,
            http::HeaderValue::from_static("application/json"),
        );

        let req = TestRequest::new(http::Method::POST, url())
            .with_body(b"{}".to_vec())
            .with_headers(headers)
            .with_auth(Some(BasicAuth::new("u", "p")))
            .with_timeout(Duration::from_secs(2));

        assert_eq!(req.body, Some(b"{}".to_vec()));
        assert!(req.headers.contains_key(http::header::ACCEPT));
        assert_eq!(req.auth, Some(BasicAuth::new("u", "p")));
        assert_eq!(req.timeout, Duration::from_secs(2));
    }

    #[test]
    fn json_parses_body() {
        let req = TestRequest::new(http::Method::POST, url()).with_body(br#"{"a":1}"#.to_vec());
        assert_eq!(req.json(), Some(json!({"a": 1})));
    }

    #[test]
    fn json_is_none_without_valid_body() {
        assert!(TestRequest::new(http::Method::HEAD, url()).json().is_none());

        let req = TestRequest::new(http::Method::POST, url()).with_body(b"{oops".to_vec());
        assert!(req.json().is_none());
    }
}

mod test_response {
    use super::*;

    #[test]
    fn json_sets_body_and_content_type() {
        let resp = TestResponse::json(http::StatusCode::CREATED, &json!({"id": 3}));

        assert_eq!(resp.status, http::StatusCode::CREATED);
        assert_eq!(resp.body_text(), Some(r#"{"id":3}"#));
        assert_eq!(
            resp.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn raw_keeps_bytes() {
        let resp = TestResponse::raw(http::StatusCode::BAD_GATEWAY, "<html>");

        assert!(resp.headers.is_empty());
        assert_eq!(resp.body, b"<html>".to_vec());
    }

    #[test]
    fn body_text_returns_none_for_invalid_utf8() {
        let resp = TestResponse::raw(http::StatusCode::OK, vec![0xFF, 0xFE]);
        assert!(resp.body_text().is_none());
    }
}

mod test_client_trait {
    use super::*;

    struct FailingClient;

    impl TestClient for FailingClient {
        fn request(&self, _req: TestRequest) -> Result<TestResponse, TransportError> {
            Err(TransportError::Timeout(Box::new(std::io::Error::other(
                "simulated",
            ))))
        }
    }

    #[test]
    fn failing_client_returns_transport_error() {
        let result = FailingClient.request(TestRequest::new(http::Method::GET, url()));
        assert!(matches!(result, Err(TransportError::Timeout(_))));
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_client<T: TestClient>() {}
        assert_client::<FailingClient>();
        assert_client::<super::super::Router>();
    }
}
