//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::http::RequestError;
use platform::storage::StorageError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// API or network failure; displays the server's message
    #[error("{0}")]
    Request(#[from] RequestError),

    /// 2xx response without a usable token and user
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// Persisted token or user is corrupt
    #[error("Malformed persisted session: {0}")]
    MalformedSession(String),

    /// Durable storage write failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Request(_) | AuthError::InvalidResponse(_) => ErrorKind::RequestFailure,
            AuthError::MalformedSession(_) => ErrorKind::MalformedPersistedState,
            AuthError::Storage(_) => ErrorKind::StorageFailure,
            AuthError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Convert to AppError with a suggested action, keeping this error as the source
    pub fn into_app_error(self) -> AppError {
        let app_error = match self.action() {
            Some(action) => self.to_app_error().with_action(action),
            None => self.to_app_error(),
        };
        app_error.with_source(self)
    }

    /// What the user can do about it; `None` when it is recovered locally
    pub fn action(&self) -> Option<&'static str> {
        match self {
            AuthError::Request(RequestError::Api { .. }) => Some("Check the form and try again"),
            AuthError::Request(_) => Some("Check your connection and try again"),
            AuthError::InvalidResponse(_) | AuthError::Internal(_) => {
                Some("Please try again later")
            }
            AuthError::Storage(_) => Some("Check that the session file is writable"),
            AuthError::MalformedSession(_) => None,
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            AuthError::Request(RequestError::Api { status, .. }) => {
                tracing::warn!(status = *status, error = %self, "Auth request rejected");
            }
            AuthError::Request(e) => {
                tracing::warn!(error = %e, "Auth request failed");
            }
            AuthError::InvalidResponse(msg) => {
                tracing::error!(message = %msg, "Auth response malformed");
            }
            AuthError::Storage(e) => {
                tracing::warn!(error = %e, "Session storage error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::MalformedSession(_) => {
                tracing::debug!(error = %self, "Ignoring persisted session");
            }
        }
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_request_error_keeps_server_message() {
        let err = AuthError::from(RequestError::Api {
            status: 401,
            message: "Invalid credentials".to_string(),
        });
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(err.kind(), ErrorKind::RequestFailure);
        assert_eq!(err.to_app_error().message(), "Invalid credentials");
    }

    #[test]
    fn test_into_app_error_keeps_source_and_action() {
        let err = AuthError::from(RequestError::Transport("connection refused".to_string()));
        let app_error = err.into_app_error();

        assert_eq!(app_error.kind(), ErrorKind::RequestFailure);
        assert_eq!(app_error.message(), "connection refused");
        assert_eq!(app_error.action(), Some("Check your connection and try again"));
        assert_eq!(app_error.source().unwrap().to_string(), "connection refused");
    }

    #[test]
    fn test_malformed_session_has_no_action() {
        let app_error = AuthError::MalformedSession("user is not JSON".to_string()).into_app_error();
        assert!(app_error.action().is_none());
        assert!(app_error.source().is_some());
    }

    #[test]
    fn test_malformed_session_is_not_user_facing() {
        let err = AuthError::MalformedSession("user is not JSON".to_string());
        assert_eq!(err.kind(), ErrorKind::MalformedPersistedState);
        assert!(!err.to_app_error().is_user_facing());
    }
}
