//! Restore Session Use Case
//!
//! Re-establishes a persisted session at startup without any network call.

use std::sync::Arc;

use crate::application::context::SessionContext;
use crate::domain::entity::session::AuthState;
use crate::domain::repository::SessionRepository;

/// Restore session use case
pub struct RestoreSessionUseCase<R>
where
    R: SessionRepository,
{
    context: Arc<SessionContext<R>>,
}

impl<R> RestoreSessionUseCase<R>
where
    R: SessionRepository,
{
    pub fn new(context: Arc<SessionContext<R>>) -> Self {
        Self { context }
    }

    /// Load the persisted token and user
    ///
    /// Absent, partial or malformed data leaves the context `Anonymous`;
    /// this never fails.
    pub fn execute(&self) -> AuthState {
        match self.context.repository().load() {
            Ok(Some(session)) => {
                tracing::info!(user_id = %session.user.id, "Session restored");
                self.context.adopt(session);
            }
            Ok(None) => {
                tracing::debug!("No persisted session");
                self.context.reset();
            }
            Err(e) => {
                e.log();
                self.context.reset();
            }
        }
        self.context.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::AuthConfig;
    use crate::infra::storage::StoredSessionRepository;
    use platform::storage::{KeyValueStorage, MemoryStorage};

    fn use_case(
        entries: &[(&str, &str)],
    ) -> RestoreSessionUseCase<StoredSessionRepository<MemoryStorage>> {
        let storage = Arc::new(MemoryStorage::new());
        for (key, value) in entries {
            storage.set(key, value).unwrap();
        }
        let repo = StoredSessionRepository::new(storage, &AuthConfig::default());
        RestoreSessionUseCase::new(Arc::new(SessionContext::new(Arc::new(repo))))
    }

    #[test]
    fn test_restore_valid_session() {
        let state = use_case(&[
            ("token", "abc"),
            ("user", r#"{"id":1,"firstName":"A","role":"seeker"}"#),
        ])
        .execute();

        assert!(state.is_authenticated());
        assert_eq!(state.token().unwrap().as_str(), "abc");
        assert_eq!(state.user().unwrap().first_name, "A");
    }

    #[test]
    fn test_restore_nothing_stored() {
        assert_eq!(use_case(&[]).execute(), AuthState::Anonymous);
    }

    #[test]
    fn test_restore_invalid_user_json() {
        let state = use_case(&[("token", "abc"), ("user", "not json")]).execute();
        assert_eq!(state, AuthState::Anonymous);
    }

    #[test]
    fn test_restore_token_without_user() {
        let state = use_case(&[("token", "abc")]).execute();
        assert_eq!(state, AuthState::Anonymous);
    }
}
