//! Key-Value Storage Repository Implementation
//!
//! The token is stored as a raw string, the user as a JSON object string.

use std::sync::Arc;

use platform::storage::KeyValueStorage;
use serde_json::Value;

use crate::application::config::AuthConfig;
use crate::domain::entity::{session::Session, user::User};
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::session_token::SessionToken;
use crate::error::{AuthError, AuthResult};

/// Session repository backed by durable key-value storage
pub struct StoredSessionRepository<S: KeyValueStorage> {
    storage: Arc<S>,
    token_key: String,
    user_key: String,
}

impl<S: KeyValueStorage> StoredSessionRepository<S> {
    pub fn new(storage: Arc<S>, config: &AuthConfig) -> Self {
        Self {
            storage,
            token_key: config.token_key.clone(),
            user_key: config.user_key.clone(),
        }
    }

    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }

    fn parse_user(raw: &str) -> AuthResult<Option<User>> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| AuthError::MalformedSession(format!("user is not valid JSON: {e}")))?;

        if value.is_null() {
            return Ok(None);
        }

        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| AuthError::MalformedSession(format!("user has unexpected shape: {e}")))
    }
}

impl<S: KeyValueStorage> SessionRepository for StoredSessionRepository<S> {
    fn load(&self) -> AuthResult<Option<Session>> {
        let Some(token) = self.storage.get(&self.token_key).and_then(SessionToken::new) else {
            return Ok(None);
        };
        let Some(raw_user) = self.storage.get(&self.user_key) else {
            return Ok(None);
        };

        Ok(Self::parse_user(&raw_user)?.map(|user| Session::new(token, user)))
    }

    fn save(&self, session: &Session) -> AuthResult<()> {
        let user = serde_json::to_string(&session.user)?;
        self.storage.set(&self.token_key, session.token.as_str())?;
        self.storage.set(&self.user_key, &user)?;
        Ok(())
    }

    fn clear(&self) -> AuthResult<()> {
        // Attempt both keys even if the first removal fails
        let token = self.storage.remove(&self.token_key);
        let user = self.storage.remove(&self.user_key);
        token?;
        user?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::storage::MemoryStorage;

    fn repo() -> StoredSessionRepository<MemoryStorage> {
        StoredSessionRepository::new(Arc::new(MemoryStorage::new()), &AuthConfig::default())
    }

    fn session() -> Session {
        Session::new(SessionToken::new("t1").unwrap(), User::new(1, "A", "seeker"))
    }

    #[test]
    fn test_save_and_load() {
        let repo = repo();
        repo.save(&session()).unwrap();

        assert_eq!(repo.storage().get("token").as_deref(), Some("t1"));
        let stored: Value = serde_json::from_str(&repo.storage().get("user").unwrap()).unwrap();
        assert_eq!(stored["firstName"], "A");

        assert_eq!(repo.load().unwrap(), Some(session()));
    }

    #[test]
    fn test_load_empty() {
        assert_eq!(repo().load().unwrap(), None);
    }

    #[test]
    fn test_load_partial() {
        let repo = repo();
        repo.storage().set("token", "t1").unwrap();
        assert_eq!(repo.load().unwrap(), None);

        let repo = self::repo();
        repo.storage().set("user", r#"{"id":1,"firstName":"A","role":"seeker"}"#).unwrap();
        assert_eq!(repo.load().unwrap(), None);
    }

    #[test]
    fn test_load_empty_token_or_null_user() {
        let repo = repo();
        repo.storage().set("token", "").unwrap();
        repo.storage().set("user", r#"{"id":1,"firstName":"A","role":"seeker"}"#).unwrap();
        assert_eq!(repo.load().unwrap(), None);

        repo.storage().set("token", "t1").unwrap();
        repo.storage().set("user", "null").unwrap();
        assert_eq!(repo.load().unwrap(), None);
    }

    #[test]
    fn test_load_malformed_user() {
        let repo = repo();
        repo.storage().set("token", "t1").unwrap();
        repo.storage().set("user", "{not json").unwrap();
        assert!(matches!(repo.load(), Err(AuthError::MalformedSession(_))));

        repo.storage().set("user", r#"["not","an","object"]"#).unwrap();
        assert!(matches!(repo.load(), Err(AuthError::MalformedSession(_))));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let repo = repo();
        repo.save(&session()).unwrap();
        repo.clear().unwrap();
        repo.clear().unwrap();

        assert!(repo.storage().is_empty());
        assert_eq!(repo.load().unwrap(), None);
    }
}
