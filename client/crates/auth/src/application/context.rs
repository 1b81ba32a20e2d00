//! Session Context
//!
//! The one place the current `AuthState` lives. Components needing auth
//! state receive a shared `SessionContext` instead of reaching for a
//! process-wide global. Durable storage mirrors the in-memory state.

use std::sync::{Arc, RwLock};

use platform::sync::{read, write};

use crate::domain::entity::{
    session::{AuthState, Session},
    user::User,
};
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::session_token::SessionToken;

pub struct SessionContext<R: SessionRepository> {
    repo: Arc<R>,
    state: RwLock<AuthState>,
}

impl<R: SessionRepository> SessionContext<R> {
    /// New context, `Anonymous` until restored or signed in
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            state: RwLock::new(AuthState::Anonymous),
        }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repo
    }

    /// Snapshot of the current state
    pub fn state(&self) -> AuthState {
        read(&self.state).clone()
    }

    pub fn is_authenticated(&self) -> bool {
        read(&self.state).is_authenticated()
    }

    pub fn has_role(&self, role: &str) -> bool {
        read(&self.state).has_role(role)
    }

    pub fn current_user(&self) -> Option<User> {
        read(&self.state).user().cloned()
    }

    pub fn token(&self) -> Option<SessionToken> {
        read(&self.state).token().cloned()
    }

    /// Become `Authenticated` and persist the session
    ///
    /// A persist failure is logged; the in-memory session stays active.
    pub fn establish(&self, session: Session) {
        if let Err(e) = self.repo.save(&session) {
            tracing::warn!(error = %e, "Failed to persist session");
        }
        *write(&self.state) = AuthState::Authenticated(session);
    }

    /// Adopt a session loaded from storage without writing it back
    pub(crate) fn adopt(&self, session: Session) {
        *write(&self.state) = AuthState::Authenticated(session);
    }

    /// Become `Anonymous` and clear durable storage; never fails
    pub fn clear(&self) {
        *write(&self.state) = AuthState::Anonymous;
        if let Err(e) = self.repo.clear() {
            tracing::warn!(error = %e, "Failed to clear persisted session");
        }
    }

    /// Forget the in-memory session only
    pub fn reset(&self) {
        *write(&self.state) = AuthState::Anonymous;
    }
}
