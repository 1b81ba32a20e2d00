//! Session Store
//!
//! Facade over the session context and the auth use cases, with an
//! explicit `init` / `teardown` lifecycle. Front ends hold one store per
//! client context.

use std::sync::Arc;

use platform::feedback::Presenter;
use platform::http::HttpClient;

use crate::application::config::AuthConfig;
use crate::application::context::SessionContext;
use crate::application::guard::GuardUseCase;
use crate::application::restore_session::RestoreSessionUseCase;
use crate::application::sign_in::SignInUseCase;
use crate::application::sign_out::SignOutUseCase;
use crate::application::sign_up::SignUpUseCase;
use crate::domain::entity::{
    payload::{AuthPayload, Credentials, RegisterInput},
    session::AuthState,
    user::User,
};
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::session_token::SessionToken;
use crate::error::AuthResult;

pub struct SessionStore<H, R, P>
where
    H: HttpClient,
    R: SessionRepository,
    P: Presenter,
{
    context: Arc<SessionContext<R>>,
    restore: RestoreSessionUseCase<R>,
    sign_in: SignInUseCase<H, R, P>,
    sign_up: SignUpUseCase<H, R, P>,
    sign_out: SignOutUseCase<R, P>,
    guard: GuardUseCase<R, P>,
}

impl<H, R, P> SessionStore<H, R, P>
where
    H: HttpClient,
    R: SessionRepository,
    P: Presenter,
{
    /// New store in the `Anonymous` state; call [`Self::init`] to restore
    pub fn new(http: Arc<H>, repo: Arc<R>, presenter: Arc<P>, config: Arc<AuthConfig>) -> Self {
        let context = Arc::new(SessionContext::new(repo));
        Self {
            restore: RestoreSessionUseCase::new(context.clone()),
            sign_in: SignInUseCase::new(
                http.clone(),
                context.clone(),
                presenter.clone(),
                config.clone(),
            ),
            sign_up: SignUpUseCase::new(http, context.clone(), presenter.clone(), config.clone()),
            sign_out: SignOutUseCase::new(context.clone(), presenter.clone(), config.clone()),
            guard: GuardUseCase::new(context.clone(), presenter, config),
            context,
        }
    }

    /// Restore a persisted session, if any
    pub fn init(&self) -> AuthState {
        self.restore.execute()
    }

    /// Drop the in-memory session; durable storage is kept
    pub fn teardown(&self) {
        self.context.reset();
    }

    /// Sign in; on failure the error is reported and returned
    pub async fn login(&self, credentials: Credentials) -> AuthResult<AuthPayload> {
        self.sign_in.execute(credentials).await
    }

    /// Sign up; on failure the error is reported and returned
    pub async fn register(&self, input: RegisterInput) -> AuthResult<AuthPayload> {
        self.sign_up.execute(input).await
    }

    pub fn logout(&self) {
        self.sign_out.execute();
    }

    pub fn require_authenticated(&self) -> bool {
        self.guard.require_authenticated()
    }

    pub fn require_role(&self, role: &str) -> bool {
        self.guard.require_role(role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.context.is_authenticated()
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.context.has_role(role)
    }

    pub fn token(&self) -> Option<SessionToken> {
        self.context.token()
    }

    pub fn current_user(&self) -> Option<User> {
        self.context.current_user()
    }

    pub fn state(&self) -> AuthState {
        self.context.state()
    }

    pub fn context(&self) -> &Arc<SessionContext<R>> {
        &self.context
    }
}
