//! Auth (Authentication) Client Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session state, user, credentials, repository trait
//! - `application/` - Use cases, session context and the `SessionStore` facade
//! - `infra/` - Persistence of the session in durable key-value storage
//!
//! ## Lifecycle
//! - `Anonymous` at start
//! - `Authenticated` after sign in, sign up, or restoring a persisted session
//! - `Anonymous` again after sign out
//!
//! Exactly one session is active per context. Concurrent sign-in attempts
//! are not serialized: the last response to arrive wins, so callers should
//! disable submission while a request is in flight.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::session_store::SessionStore;
pub use error::{AuthError, AuthResult};
pub use infra::storage::StoredSessionRepository;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
}
