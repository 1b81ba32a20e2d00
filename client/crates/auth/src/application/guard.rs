//! Access Guards
//!
//! The checks themselves are pure predicates over `AuthState`. Redirect
//! and notification happen only in [`GuardUseCase`], after a check fails.

use std::sync::Arc;

use platform::feedback::{Presenter, Severity};

use crate::application::config::AuthConfig;
use crate::application::context::SessionContext;
use crate::domain::entity::session::AuthState;
use crate::domain::repository::SessionRepository;

/// Why a guard refused access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDenial {
    NotAuthenticated,
    /// Anonymous, or signed in with another role
    MissingRole,
}

impl AccessDenial {
    pub fn message(&self) -> &'static str {
        match self {
            AccessDenial::NotAuthenticated => "Please sign in to access this page",
            AccessDenial::MissingRole => "You do not have permission to access this page",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            AccessDenial::NotAuthenticated => Severity::Warning,
            AccessDenial::MissingRole => Severity::Error,
        }
    }
}

pub fn check_authenticated(state: &AuthState) -> Result<(), AccessDenial> {
    if state.is_authenticated() {
        Ok(())
    } else {
        Err(AccessDenial::NotAuthenticated)
    }
}

/// Exact, case-sensitive role match
pub fn check_role(state: &AuthState, role: &str) -> Result<(), AccessDenial> {
    if state.has_role(role) {
        Ok(())
    } else {
        Err(AccessDenial::MissingRole)
    }
}

/// Guard use case: check, and on denial notify and redirect
pub struct GuardUseCase<R, P>
where
    R: SessionRepository,
    P: Presenter,
{
    context: Arc<SessionContext<R>>,
    presenter: Arc<P>,
    config: Arc<AuthConfig>,
}

impl<R, P> GuardUseCase<R, P>
where
    R: SessionRepository,
    P: Presenter,
{
    pub fn new(context: Arc<SessionContext<R>>, presenter: Arc<P>, config: Arc<AuthConfig>) -> Self {
        Self {
            context,
            presenter,
            config,
        }
    }

    pub fn require_authenticated(&self) -> bool {
        self.enforce(check_authenticated(&self.context.state()))
    }

    pub fn require_role(&self, role: &str) -> bool {
        self.enforce(check_role(&self.context.state(), role))
    }

    fn enforce(&self, check: Result<(), AccessDenial>) -> bool {
        match check {
            Ok(()) => true,
            Err(denial) => {
                tracing::info!(reason = ?denial, "Access denied");
                self.presenter.show_notification(denial.message(), denial.severity());
                self.presenter.redirect(&self.config.home_page);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::{session::Session, user::User};
    use crate::domain::value_object::session_token::SessionToken;
    use crate::domain::value_object::user_role::{EMPLOYER, SEEKER};

    fn signed_in(role: &str) -> AuthState {
        AuthState::Authenticated(Session::new(
            SessionToken::new("t1").unwrap(),
            User::new(1, "A", role),
        ))
    }

    #[test]
    fn test_check_authenticated() {
        assert_eq!(check_authenticated(&signed_in(SEEKER)), Ok(()));
        assert_eq!(
            check_authenticated(&AuthState::Anonymous),
            Err(AccessDenial::NotAuthenticated)
        );
    }

    #[test]
    fn test_check_role() {
        let state = signed_in(EMPLOYER);
        assert_eq!(check_role(&state, EMPLOYER), Ok(()));
        assert_eq!(check_role(&state, "Employer"), Err(AccessDenial::MissingRole));
        assert_eq!(
            check_role(&AuthState::Anonymous, EMPLOYER),
            Err(AccessDenial::MissingRole)
        );
    }

    #[test]
    fn test_denial_feedback() {
        assert_eq!(AccessDenial::NotAuthenticated.severity(), Severity::Warning);
        assert_eq!(AccessDenial::MissingRole.severity(), Severity::Error);
        assert_eq!(
            AccessDenial::MissingRole.message(),
            "You do not have permission to access this page"
        );
    }
}
