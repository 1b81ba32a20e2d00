//! Shared token exchange for sign in and sign up

use platform::feedback::{Presenter, Severity};
use platform::http::{HttpClient, RequestOptions};
use serde_json::Value;

use crate::application::context::SessionContext;
use crate::domain::entity::payload::AuthPayload;
use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

/// One authenticating request and its presentation texts
pub(super) struct Exchange<'a> {
    pub url: String,
    pub body: Value,
    pub scope: &'a str,
    pub loading_message: &'a str,
    pub success_message: &'a str,
}

/// Run an exchange with loading and notification feedback
///
/// On failure the error is reported to the presenter and then returned,
/// with the context left untouched.
pub(super) async fn authenticate<H, R, P>(
    http: &H,
    context: &SessionContext<R>,
    presenter: &P,
    exchange: Exchange<'_>,
) -> AuthResult<AuthPayload>
where
    H: HttpClient,
    R: SessionRepository,
    P: Presenter,
{
    presenter.show_loading(exchange.scope, exchange.loading_message);

    let result = send(http, context, &exchange.url, exchange.body).await;
    match &result {
        Ok(_) => presenter.show_notification(exchange.success_message, Severity::Success),
        Err(e) => {
            e.log();
            presenter.handle_error(Some(&e.to_string()), Some(exchange.scope));
        }
    }

    presenter.hide_loading(exchange.scope);
    result
}

async fn send<H, R>(
    http: &H,
    context: &SessionContext<R>,
    url: &str,
    body: Value,
) -> AuthResult<AuthPayload>
where
    H: HttpClient,
    R: SessionRepository,
{
    let response = http.request(url, RequestOptions::post_json(body)).await?;
    let payload = AuthPayload::from_response(response)?;
    context.establish(payload.to_session()?);
    Ok(payload)
}
