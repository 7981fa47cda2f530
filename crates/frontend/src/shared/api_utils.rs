//! API utilities for frontend-backend communication
//!
//! Every gateway call goes through [`ApiClient`]: it joins paths to the API base,
//! attaches the bearer token, enforces the request timeout and maps failures
//! into [`GatewayError`].

use contracts::shared::api_error::ApiErrorBody;
use futures::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use thiserror::Error;

use crate::shared::config::FrontendConfig;
use crate::system::auth::storage;

/// Everything that can go wrong while talking to the backend.
///
/// `Display` text is shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("Network error: {0}")]
    Transport(String),
    #[error("The server did not respond in {0} ms")]
    Timeout(u32),
    #[error("{}", status_text(.status, .message))]
    Status { status: u16, message: Option<String> },
    #[error("Unexpected response from server: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

fn status_text(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(m) => m.clone(),
        None => format!("Request failed with status {}", status),
    }
}

impl GatewayError {
    /// Build a status error from a non-2xx response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        GatewayError::Status {
            status,
            message: ApiErrorBody::parse_message(body),
        }
    }
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Join a base and a path without doubling or dropping the slash.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// Thin HTTP client for the remote backend. Cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    timeout_ms: u32,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms,
        }
    }

    pub fn from_config(config: &FrontendConfig) -> Self {
        let base_url = if config.api.base_url.trim().is_empty() {
            api_base()
        } else {
            config.api.base_url.trim().to_string()
        };
        Self::new(base_url, config.api.timeout_ms)
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn builder(&self, method: HttpMethod, path: &str) -> RequestBuilder {
        let url = self.url(path);
        let builder = match method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Delete => Request::delete(&url),
        };
        match storage::get_access_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Run a whole exchange (send, status check, body) under the client timeout.
    async fn timed<T, F>(&self, exchange: F) -> Result<T, GatewayError>
    where
        F: Future<Output = Result<T, GatewayError>>,
    {
        with_timeout(exchange, self.timeout_ms).await?
    }

    async fn execute(request: Request) -> Result<Response, GatewayError> {
        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::warn!("{} -> {} {}", response.url(), status, body);
            if status == 401 {
                storage::clear_access_token();
            }
            return Err(GatewayError::from_status(status, &body));
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
        response
            .json::<T>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }

    /// `GET path` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let request = self
            .builder(HttpMethod::Get, path)
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        self.timed(async move { Self::decode(Self::execute(request).await?).await })
            .await
    }

    /// `PUT path` with a JSON body, decoding the JSON answer.
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = self
            .builder(HttpMethod::Put, path)
            .json(body)
            .map_err(|e| GatewayError::Encode(e.to_string()))?;
        self.timed(async move { Self::decode(Self::execute(request).await?).await })
            .await
    }

    /// `POST path` without a body; the answer body is ignored.
    pub async fn post_empty(&self, path: &str) -> Result<(), GatewayError> {
        let request = self
            .builder(HttpMethod::Post, path)
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        self.timed(async move { Self::execute(request).await.map(|_| ()) })
            .await
    }

    /// `DELETE path`; the answer body is ignored.
    pub async fn delete(&self, path: &str) -> Result<(), GatewayError> {
        let request = self
            .builder(HttpMethod::Delete, path)
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        self.timed(async move { Self::execute(request).await.map(|_| ()) })
            .await
    }
}

/// Resolve `fut`, or fail with [`GatewayError::Timeout`] after `timeout_ms`.
pub async fn with_timeout<F, T>(fut: F, timeout_ms: u32) -> Result<T, GatewayError>
where
    F: Future<Output = T>,
{
    race_deadline(fut, TimeoutFuture::new(timeout_ms), timeout_ms).await
}

async fn race_deadline<F, D, T>(fut: F, deadline: D, timeout_ms: u32) -> Result<T, GatewayError>
where
    F: Future<Output = T>,
    D: Future<Output = ()>,
{
    futures::pin_mut!(fut, deadline);
    match select(fut, deadline).await {
        Either::Left((value, _)) => Ok(value),
        Either::Right(_) => Err(GatewayError::Timeout(timeout_ms)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://h:3000", "/cities"), "http://h:3000/cities");
        assert_eq!(join_url("http://h:3000/", "/cities"), "http://h:3000/cities");
        assert_eq!(join_url("http://h:3000/api", "cities"), "http://h:3000/api/cities");
        assert_eq!(join_url("", "/cities"), "/cities");
    }

    #[test]
    fn test_status_error_prefers_backend_message() {
        let err = GatewayError::from_status(404, r#"{"message": "Listing not found"}"#);
        assert_eq!(
            err,
            GatewayError::Status {
                status: 404,
                message: Some("Listing not found".to_string())
            }
        );
        assert_eq!(err.to_string(), "Listing not found");
    }

    #[test]
    fn test_status_error_without_body() {
        let err = GatewayError::from_status(500, "");
        assert_eq!(err.to_string(), "Request failed with status 500");
    }

    #[test]
    fn test_timeout_message() {
        assert_eq!(
            GatewayError::Timeout(10_000).to_string(),
            "The server did not respond in 10000 ms"
        );
    }

    #[test]
    fn test_client_url() {
        let client = ApiClient::new("https://api.example.com/", 5_000);
        assert_eq!(client.url("/categories"), "https://api.example.com/categories");
    }

    #[test]
    fn test_deadline_covers_stalled_body() {
        // headers arrived, the body never does
        let exchange = async {
            let status = future::ready(200u16).await;
            future::pending::<Result<u16, GatewayError>>().await?;
            Ok::<u16, GatewayError>(status)
        };
        let result = block_on(race_deadline(exchange, future::ready(()), 10_000));
        assert_eq!(result, Err(GatewayError::Timeout(10_000)));
    }

    #[test]
    fn test_finished_exchange_beats_deadline() {
        let exchange = async { Ok::<u16, GatewayError>(204) };
        let result = block_on(race_deadline(exchange, future::pending::<()>(), 10_000));
        assert_eq!(result, Ok(Ok(204)));
    }
}
