//! Tests for request execution.

use super::*;

use std::sync::Arc;
use std::time::Duration;

use http::{Method, StatusCode};
use omi_async_http_client::backend::MockTestClientBackend;
use omi_async_http_client::client::{BasicAuth, HttpException};
use omi_async_http_client::config::Cli;
use omi_async_http_client::mock::{Router, TestResponse};
use serde_json::json;

const BASE: &str = "http://testserver/api/";

fn config(args: &[&str]) -> ValidatedConfig {
    let mut full_args = vec!["omi-http", "--base-url", BASE];
    full_args.extend(args);
    ValidatedConfig::from_raw(&Cli::parse_from_iter(full_args), None).unwrap()
}

fn items_router() -> Router {
    Router::new()
        .respond(
            Method::GET,
            "/api/items",
            TestResponse::json(StatusCode::OK, &json!([{"id": 1}])),
        )
        .route(Method::POST, "/api/items", |req| {
            Ok(TestResponse::json(
                StatusCode::CREATED,
                &req.json().unwrap_or_default(),
            ))
        })
        .respond(
            Method::DELETE,
            "/api/items/1",
            TestResponse::json(StatusCode::FORBIDDEN, &json!({"code": 40})),
        )
        .respond(
            Method::HEAD,
            "/api/items",
            TestResponse::raw(StatusCode::OK, Vec::new()),
        )
}

mod run_error {
    use super::*;

    #[test]
    fn request_error_is_transparent() {
        let err = RunError::from(BackendError::NotImplemented("send"));
        assert_eq!(err.to_string(), "send is not implemented");
    }

    #[test]
    fn debug_format_works() {
        let err = RunError::from(BackendError::NotImplemented("send"));
        assert!(format!("{err:?}").contains("Request"));
    }
}

mod build_client {
    use super::*;

    #[test]
    fn applies_config() {
        let config = config(&[
            "get",
            "items",
            "--timeout",
            "7",
            "--header",
            "X-Api-Key=k",
            "-u",
            "alice",
            "--password",
            "pw",
        ]);

        let client = build_client(MockTestClientBackend::new(Router::new()), &config);

        assert_eq!(client.base_url().as_str(), BASE);
        assert_eq!(client.timeout(), Duration::from_secs(7));
        assert_eq!(client.headers().get("x-api-key").unwrap(), "k");
        assert_eq!(
            client.credentials().normalize(),
            Some(BasicAuth::new("alice", "pw"))
        );
    }
}

mod dispatch {
    use super::*;

    async fn run(args: &[&str], router: Arc<Router>) -> BackendResult {
        let config = config(args);
        let client = build_client(MockTestClientBackend::from_arc(router), &config);
        super::super::dispatch(&client, config.verb, &config.path, config.data.as_ref()).await
    }

    #[tokio::test]
    async fn get_returns_decoded_body() {
        let response = run(&["get", "items"], Arc::new(items_router()))
            .await
            .unwrap();

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.response(), &json!([{"id": 1}]));
    }

    #[tokio::test]
    async fn post_forwards_data() {
        let response = run(
            &["post", "/items", "--data", r#"{"name":"widget"}"#],
            Arc::new(items_router()),
        )
        .await
        .unwrap();

        assert_eq!(response.status_code(), StatusCode::CREATED);
        assert_eq!(response.response(), &json!({"name": "widget"}));
    }

    #[tokio::test]
    async fn head_drops_data() {
        let router = Arc::new(items_router());

        let response = run(&["head", "items", "--data", "[1]"], Arc::clone(&router))
            .await
            .unwrap();

        assert_eq!(response.response(), &serde_json::Value::Null);
        let requests = router.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].body.is_none());
    }

    #[tokio::test]
    async fn rejected_response_surfaces_trace_code() {
        let err = run(&["delete", "items/1"], Arc::new(items_router()))
            .await
            .unwrap_err();

        let exc = err.as_http().unwrap();
        assert_eq!(exc.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(exc.trace_code(), Some(40));
    }

    #[tokio::test]
    async fn send_is_not_implemented() {
        let err = run(&["send", "items"], Arc::new(items_router()))
            .await
            .unwrap_err();

        assert!(matches!(err, BackendError::NotImplemented("send")));
    }
}

mod render {
    use super::*;

    #[test]
    fn renders_pretty_json() {
        let response = ClientBackendResponse::new(StatusCode::OK, json!({"a": 1}));

        let text = render(&response).unwrap();

        assert_eq!(text, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn renders_null_body() {
        let response = ClientBackendResponse::new(StatusCode::OK, serde_json::Value::Null);
        assert_eq!(render(&response).unwrap(), "null");
    }
}

mod describe_failure {
    use super::*;

    #[test]
    fn includes_status_trace_code_and_detail() {
        let exc = HttpException::new(StatusCode::NOT_FOUND).with_trace_code(7);
        let err = RunError::from(BackendError::from(exc));

        assert_eq!(describe_failure(&err), "HTTP 404 [trace code 7]: Not Found");
    }

    #[test]
    fn omits_missing_trace_code() {
        let exc = HttpException::new(StatusCode::SERVICE_UNAVAILABLE);
        let err = RunError::from(BackendError::from(exc));

        assert_eq!(describe_failure(&err), "HTTP 503: Service Unavailable");
    }

    #[test]
    fn non_http_errors_use_display() {
        let err = RunError::from(BackendError::NotImplemented("send"));
        assert_eq!(describe_failure(&err), "send is not implemented");
    }
}
