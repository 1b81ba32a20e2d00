//! Sign Up Use Case
//!
//! Registers a new account; a successful sign up is also a sign in.

use std::sync::Arc;

use platform::feedback::Presenter;
use platform::http::HttpClient;

use crate::application::authenticate::{Exchange, authenticate};
use crate::application::config::AuthConfig;
use crate::application::context::SessionContext;
use crate::domain::entity::payload::{AuthPayload, RegisterInput};
use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

pub const CREATING_ACCOUNT_MESSAGE: &str = "Creating account...";
pub const ACCOUNT_CREATED_MESSAGE: &str = "Account created successfully!";

/// Sign up use case
pub struct SignUpUseCase<H, R, P>
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

impl<H, R, P> SignUpUseCase<H, R, P>
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

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<AuthPayload> {
        let exchange = Exchange {
            url: self.config.register_url(),
            body: serde_json::to_value(&input)?,
            scope: &self.config.sign_up_scope,
            loading_message: CREATING_ACCOUNT_MESSAGE,
            success_message: ACCOUNT_CREATED_MESSAGE,
        };

        let payload = authenticate(&*self.http, &self.context, &*self.presenter, exchange).await?;
        tracing::info!(user_id = %payload.user.id, role = %payload.user.role, "User registered");
        Ok(payload)
    }
}
