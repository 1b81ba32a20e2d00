//! Repository Traits
//!
//! Interface for persisting the session. Implementation is in the
//! infrastructure layer. Calls are synchronous and complete before the
//! caller proceeds.

use crate::domain::entity::session::Session;
use crate::error::AuthResult;

/// Durable session repository
pub trait SessionRepository: Send + Sync {
    /// Load the persisted session
    ///
    /// `Ok(None)` when nothing (or only part of a session) is stored,
    /// `Err(AuthError::MalformedSession)` when stored data is corrupt.
    fn load(&self) -> AuthResult<Option<Session>>;

    /// Persist token and user
    fn save(&self, session: &Session) -> AuthResult<()>;

    /// Remove token and user; clearing an empty store succeeds
    fn clear(&self) -> AuthResult<()>;
}
