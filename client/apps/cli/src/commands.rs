//! Subcommand implementations
//!
//! Every command returns whether it succeeded; the caller turns that into
//! the exit code.

use std::path::Path;
use std::sync::Arc;

use auth::models::payload::{AuthPayload, Credentials, RegisterInput};
use auth::{AuthConfig, AuthResult, SessionStore, StoredSessionRepository};
use kernel::error::app_error::ResultExt;
use kernel::error::kind::ErrorKind;
use platform::feedback::UiFeedback;
use platform::http::ReqwestHttpClient;
use platform::storage::FileStorage;
use serde_json::{Map, Value};
use validation::basic::validate_input;
use validation::{
    EmptyForm, Field, FieldValidator, Form, FormValidator, InputKind, PasswordStrengthMeter,
    ValidationConfig,
};

use crate::field_args::parse_field;

// ============================================================================
// Validation
// ============================================================================

pub fn validate(
    config: &ValidationConfig,
    value: &str,
    rules: &str,
    password: Option<String>,
) -> bool {
    let names = validation::model::parse_rule_names(rules);
    let validator = FieldValidator::new(config);

    let outcome = match password {
        Some(password) => {
            let siblings = Form::new().with_field(
                Field::new(validation::rules::PASSWORD_FIELD, InputKind::Password)
                    .with_value(password),
            );
            validator.validate(value, &names, &siblings)
        }
        None => validator.validate(value, &names, &EmptyForm),
    };

    report(None, outcome.valid, outcome.message.as_deref())
}

pub fn form(config: &ValidationConfig, fields: &[String]) -> anyhow::Result<bool> {
    let mut form = Form::new();
    for field in fields {
        form.push(parse_field(field)?);
    }

    let ui = UiFeedback::new();
    let valid = FormValidator::new(config).validate_and_render(&mut form, &ui);

    for field in &form.fields {
        report(Some(&field.name), field.state.valid, field.state.message.as_deref());
    }
    if !valid {
        tracing::info!(invalid = form.invalid_fields().count(), "Form rejected");
    }
    Ok(valid)
}

pub fn check(kind: &str, value: &str) -> bool {
    let kind = kind.parse::<InputKind>().unwrap_or_default();
    let outcome = validate_input(kind, value);
    report(None, outcome.valid, outcome.message.as_deref())
}

pub fn strength(password: &str) -> bool {
    let report = PasswordStrengthMeter::assess(password);
    match report.level {
        Some(level) => println!(
            "{}/{} {} ({})",
            report.score,
            validation::strength::MAX_STRENGTH,
            level.label(),
            level.color()
        ),
        None => println!("0/{}", validation::strength::MAX_STRENGTH),
    }
    true
}

fn report(field: Option<&str>, valid: bool, message: Option<&str>) -> bool {
    let prefix = field.map(|f| format!("{f}: ")).unwrap_or_default();
    if valid {
        println!("{prefix}ok");
    } else {
        println!("{prefix}{}", message.unwrap_or_default());
    }
    valid
}

// ============================================================================
// Session
// ============================================================================

type Store = SessionStore<ReqwestHttpClient, StoredSessionRepository<FileStorage>, UiFeedback>;

/// A restored session store over the storage file
pub struct Session {
    store: Store,
    ui: Arc<UiFeedback>,
}

impl Session {
    pub fn open(path: &Path, api_url: Option<String>) -> Self {
        let mut config = AuthConfig::from_env();
        if let Some(url) = api_url {
            config = config.with_api_base_url(url);
        }
        let config = Arc::new(config);

        let storage = Arc::new(FileStorage::new(path));
        let repo = Arc::new(StoredSessionRepository::new(storage, &config));
        let ui = Arc::new(UiFeedback::new());
        let store = SessionStore::new(Arc::new(ReqwestHttpClient::new()), repo, ui.clone(), config);

        store.init();
        Self { store, ui }
    }

    pub async fn login(&self, email: String, password: String) -> bool {
        let result = self.store.login(Credentials::new(email, password)).await;
        self.finish("Sign in", result)
    }

    pub async fn register(
        &self,
        first_name: String,
        last_name: String,
        email: String,
        password: String,
        role: String,
        extra: Map<String, Value>,
    ) -> bool {
        let mut input = RegisterInput::new(first_name, last_name, email, password, role);
        input.extra = extra;

        let result = self.store.register(input).await;
        self.finish("Sign up", result)
    }

    pub fn logout(&self) -> bool {
        self.store.logout();
        self.print_feedback();
        true
    }

    pub fn status(&self) -> anyhow::Result<bool> {
        match self.store.current_user() {
            Some(user) => {
                let json = serde_json::to_string_pretty(&user)
                    .map_app_err(ErrorKind::Internal, "Failed to render the signed-in user")?;
                println!("{json}");
            }
            None => println!("anonymous"),
        }
        Ok(true)
    }

    pub fn require_role(&self, role: &str) -> bool {
        let ok = self.store.require_role(role);
        self.print_feedback();
        ok
    }

    fn finish(&self, command: &str, result: AuthResult<AuthPayload>) -> bool {
        self.print_feedback();
        match result {
            Ok(payload) => {
                println!("Signed in as {} ({})", payload.user.first_name, payload.user.role);
                true
            }
            Err(e) => {
                let error = e.into_app_error();
                tracing::debug!(command = %command, error = %error, "Auth command failed");
                if let Some(action) = error.action().filter(|_| error.is_user_facing()) {
                    println!("{action}");
                }
                false
            }
        }
    }

    /// Print notifications and the last requested redirect
    fn print_feedback(&self) {
        for notification in self.ui.notifications().active() {
            println!("[{}] {}", notification.severity, notification.message);
        }
        if let Some(target) = self.ui.last_redirect() {
            println!("-> {target}");
        }
    }
}
