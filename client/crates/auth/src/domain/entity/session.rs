//! Session Entity
//!
//! `AuthState` is the client's whole authentication state. A session
//! always carries both a token and a user, so "authenticated" can never
//! be true with either missing.

use crate::domain::entity::user::User;
use crate::domain::value_object::session_token::SessionToken;

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: SessionToken,
    pub user: User,
}

impl Session {
    pub fn new(token: SessionToken, user: User) -> Self {
        Self { token, user }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Anonymous,
    Authenticated(Session),
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthState::Authenticated(session) => Some(session),
            AuthState::Anonymous => None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.session().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&SessionToken> {
        self.session().map(|s| &s.token)
    }

    /// Authenticated and the user's role matches exactly
    pub fn has_role(&self, role: &str) -> bool {
        self.user().is_some_and(|u| u.has_role(role))
    }
}
