//! Request execution.
//!
//! Turns a validated configuration into one call on an [`ApiClient`] and
//! formats the outcome for the terminal.

use thiserror::Error;

use omi_async_http_client::backend::ReqwestBackend;
use omi_async_http_client::client::{
    ApiClient, AsyncHttpClientBackend, BackendError, BackendResult, ClientBackendResponse,
};
use omi_async_http_client::config::{ValidatedConfig, Verb};
use serde_json::Value;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The request failed or the response was rejected.
    #[error(transparent)]
    Request(#[from] BackendError),

    /// The decoded body could not be rendered.
    #[error("Failed to render response: {0}")]
    Render(#[source] serde_json::Error),
}

/// Builds a client for `config` on top of `backend`.
pub fn build_client<B>(backend: B, config: &ValidatedConfig) -> ApiClient<B> {
    ApiClient::new(backend, config.base_url.clone())
        .with_headers(config.headers.clone())
        .with_credentials(config.credentials.clone())
        .with_timeout(config.timeout)
}

/// Issues `verb` against `path`.
///
/// `data` is dropped for HEAD and GET.
///
/// # Errors
///
/// Returns whatever the client returns.
pub async fn dispatch<B: AsyncHttpClientBackend>(
    client: &ApiClient<B>,
    verb: Verb,
    path: &str,
    data: Option<&Value>,
) -> BackendResult {
    if data.is_some() && !verb.has_body() {
        tracing::warn!("Ignoring request data for {verb}");
    }

    match verb {
        Verb::Head => client.head(path).await,
        Verb::Get => client.get(path).await,
        Verb::Put => client.put(path, data).await,
        Verb::Post => client.post(path, data).await,
        Verb::Delete => client.delete(path, data).await,
        Verb::Send => client.send(path, data).await,
    }
}

/// Executes the configured request with the production backend.
///
/// # Errors
///
/// Returns [`RunError::Request`] if the request fails.
pub async fn execute(config: ValidatedConfig) -> Result<ClientBackendResponse, RunError> {
    let client = build_client(ReqwestBackend::new(), &config);

    let response = dispatch(&client, config.verb, &config.path, config.data.as_ref()).await?;
    tracing::debug!(
        "{} {} -> {}",
        config.verb,
        config.path,
        response.status_code()
    );
    Ok(response)
}

/// Renders the response body as pretty JSON.
///
/// # Errors
///
/// Returns [`RunError::Render`] if serialization fails.
pub fn render(response: &ClientBackendResponse) -> Result<String, RunError> {
    serde_json::to_string_pretty(response.response()).map_err(RunError::Render)
}

/// One-line description of a failed run.
#[must_use]
pub fn describe_failure(error: &RunError) -> String {
    let RunError::Request(BackendError::Http(exc)) = error else {
        return error.to_string();
    };

    let trace = exc
        .trace_code()
        .map(|code| format!(" [trace code {code}]"))
        .unwrap_or_default();
    format!(
        "HTTP {}{trace}: {}",
        exc.status_code().as_u16(),
        exc.detail_text()
    )
}
