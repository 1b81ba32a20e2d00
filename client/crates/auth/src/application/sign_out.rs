//! Sign Out Use Case
//!
//! Clears the session from memory and durable storage.

use std::sync::Arc;

use platform::feedback::{Presenter, Severity};

use crate::application::config::AuthConfig;
use crate::application::context::SessionContext;
use crate::domain::repository::SessionRepository;

pub const SIGNED_OUT_MESSAGE: &str = "Successfully logged out";

/// Sign out use case
pub struct SignOutUseCase<R, P>
where
    R: SessionRepository,
    P: Presenter,
{
    context: Arc<SessionContext<R>>,
    presenter: Arc<P>,
    config: Arc<AuthConfig>,
}

impl<R, P> SignOutUseCase<R, P>
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

    /// Sign out; idempotent and infallible
    pub fn execute(&self) {
        if let Some(user) = self.context.current_user() {
            tracing::info!(user_id = %user.id, "User signed out");
        }
        self.context.clear();

        self.presenter.show_notification(SIGNED_OUT_MESSAGE, Severity::Success);
        self.presenter.redirect(&self.config.home_page);
    }
}
