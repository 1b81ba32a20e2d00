//! HTTP Request Contract
//!
//! The client core never talks to the network directly. It goes through
//! [`HttpClient`], whose single operation sends a JSON request and yields the
//! decoded JSON body on 2xx, or a [`RequestError`] carrying a human-readable
//! message otherwise. Timeout policy belongs to the implementation.

use http::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use http::Method;
use serde_json::Value;
use thiserror::Error;

/// Message used when a failed response carries no `message` field
pub const DEFAULT_REQUEST_ERROR: &str = "Request failed";

/// Request failure surfaced to callers
///
/// `Display` yields the human-readable message only, so it can be shown to
/// the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Non-2xx response from the API
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Connection, DNS, TLS or other transport failure
    #[error("{0}")]
    Transport(String),

    /// Response body could not be decoded as JSON
    #[error("{0}")]
    Decode(String),
}

impl RequestError {
    /// Human-readable message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Options for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    /// JSON body, serialized as-is
    pub body: Option<Value>,
    /// Extra headers; they override the defaults on name clash
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    /// `POST` with a JSON body
    pub fn post_json(body: Value) -> Self {
        Self {
            method: Method::POST,
            body: Some(body),
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// HTTP collaborator trait
#[trait_variant::make(HttpClient: Send)]
pub trait LocalHttpClient {
    /// Send a request and return the decoded JSON body
    async fn request(&self, url: &str, options: RequestOptions) -> Result<Value, RequestError>;
}

/// Build the outgoing header map
///
/// `Content-Type: application/json` is always present unless the caller
/// supplies its own.
pub fn build_headers(headers: &[(String, String)]) -> Result<HeaderMap, RequestError> {
    let mut map = HeaderMap::new();
    map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| RequestError::Transport(format!("Invalid header name: {name}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| RequestError::Transport(format!("Invalid value for header {name}")))?;
        map.insert(name, value);
    }

    Ok(map)
}

/// Extract the error text from a failed response body
pub fn error_message(body: &Value) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(DEFAULT_REQUEST_ERROR)
        .to_string()
}

/// `reqwest`-backed implementation
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (timeouts, proxies, ...)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpClient for ReqwestHttpClient {
    async fn request(&self, url: &str, options: RequestOptions) -> Result<Value, RequestError> {
        let headers = build_headers(&options.headers)?;
        let mut builder = self
            .client
            .request(options.method.clone(), url)
            .headers(headers);

        if let Some(body) = &options.body {
            builder = builder.body(body.to_string());
        }

        tracing::debug!(method = %options.method, url = %url, "Sending API request");

        let response = builder
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        let data: Result<Value, _> = serde_json::from_str(&text);

        if !status.is_success() {
            let message = data
                .as_ref()
                .map(error_message)
                .unwrap_or_else(|_| DEFAULT_REQUEST_ERROR.to_string());
            tracing::warn!(status = status.as_u16(), url = %url, "API request failed");
            return Err(RequestError::Api {
                status: status.as_u16(),
                message,
            });
        }

        data.map_err(|e| RequestError::Decode(format!("Invalid JSON response: {e}")))
    }
}
