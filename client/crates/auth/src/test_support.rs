//! Test doubles

use std::collections::VecDeque;
use std::sync::Mutex;

use platform::http::{HttpClient, RequestError, RequestOptions};
use platform::sync::lock;
use serde_json::Value;

/// A request seen by [`ScriptedHttpClient`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub body: Value,
}

/// HTTP client answering from a queue of scripted responses
#[derive(Debug, Default)]
pub struct ScriptedHttpClient {
    responses: Mutex<VecDeque<Result<Value, RequestError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, response: Result<Value, RequestError>) {
        lock(&self.responses).push_back(response);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }
}

impl HttpClient for ScriptedHttpClient {
    async fn request(&self, url: &str, options: RequestOptions) -> Result<Value, RequestError> {
        lock(&self.requests).push(RecordedRequest {
            url: url.to_string(),
            body: options.body.unwrap_or(Value::Null),
        });
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| Err(RequestError::Transport("no scripted response".to_string())))
    }
}
