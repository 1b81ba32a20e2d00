//! Sign In Use Case
//!
//! Exchanges credentials for a token and user.

use std::sync::Arc;

use platform::feedback::Presenter;
use platform::http::HttpClient;

use crate::application::authenticate::{Exchange, authenticate};
use crate::application::config::AuthConfig;
use crate::application::context::SessionContext;
use crate::domain::entity::payload::{AuthPayload, Credentials};
use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

pub const SIGNING_IN_MESSAGE: &str = "Signing in...";
pub const SIGNED_IN_MESSAGE: &str = "Successfully signed in!";

/// Sign in use case
pub struct SignInUseCase<H, R, P>
where
    H: HttpClient,
    R: SessionRepository,
    P: Presenter,
{
    http: Arc<H>,
    context: Arc<SessionContext<R>>,
    presenter: Arc<P>,
    config: Arc<AuthConfig>,
}

impl<H, R, P> SignInUseCase<H, R, P>
where
    H: HttpClient,
    R: SessionRepository,
    P: Presenter,
{
    pub fn new(
        http: Arc<H>,
        context: Arc<SessionContext<R>>,
        presenter: Arc<P>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            http,
            context,
            presenter,
            config,
        }
    }

    pub async fn execute(&self, credentials: Credentials) -> AuthResult<AuthPayload> {
        let exchange = Exchange {
            url: self.config.login_url(),
            body: serde_json::to_value(&credentials)?,
            scope: &self.config.sign_in_scope,
            loading_message: SIGNING_IN_MESSAGE,
            success_message: SIGNED_IN_MESSAGE,
        };

        let payload = authenticate(&*self.http, &self.context, &*self.presenter, exchange).await?;
        tracing::info!(user_id = %payload.user.id, role = %payload.user.role, "User signed in");
        Ok(payload)
    }
}
