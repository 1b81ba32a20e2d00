//! Presenter
//!
//! The rendering side of the client. Core logic only ever asks the
//! presenter to show something; it never reads rendering state back.

use std::collections::BTreeMap;
use std::sync::Mutex;

use super::loading::LoadingOverlay;
use super::notification::{NotificationCenter, Severity};
use crate::sync::lock;

/// Shown when an error carries no message of its own
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Presentation collaborator
pub trait Presenter: Send + Sync {
    fn show_loading(&self, scope: &str, message: &str);

    fn hide_loading(&self, scope: &str);

    fn show_notification(&self, message: &str, severity: Severity);

    /// Show (`Some`) or clear (`None`) the inline error under a field
    fn render_field_error(&self, field: &str, message: Option<&str>);

    /// Replace a scope's content with an error panel
    fn render_scope_error(&self, scope: &str, message: &str);

    /// Request navigation to another page
    fn redirect(&self, target: &str);

    /// Report an error: render it into `scope` if given, then notify
    fn handle_error(&self, message: Option<&str>, scope: Option<&str>) {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_ERROR_MESSAGE);

        tracing::error!(error = %message, scope = ?scope, "Error");

        if let Some(scope) = scope {
            self.render_scope_error(scope, message);
        }
        self.show_notification(message, Severity::Error);
    }
}

/// In-process presenter holding the whole feedback state
///
/// Used by the command-line front end and as the presentation double in
/// tests. Every call is also traced.
#[derive(Debug, Default)]
pub struct UiFeedback {
    loading: LoadingOverlay,
    notifications: NotificationCenter,
    field_errors: Mutex<BTreeMap<String, String>>,
    scope_errors: Mutex<BTreeMap<String, String>>,
    redirects: Mutex<Vec<String>>,
}

impl UiFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading(&self) -> &LoadingOverlay {
        &self.loading
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn field_error(&self, field: &str) -> Option<String> {
        lock(&self.field_errors).get(field).cloned()
    }

    pub fn field_errors(&self) -> BTreeMap<String, String> {
        lock(&self.field_errors).clone()
    }

    pub fn scope_error(&self, scope: &str) -> Option<String> {
        lock(&self.scope_errors).get(scope).cloned()
    }

    pub fn last_redirect(&self) -> Option<String> {
        lock(&self.redirects).last().cloned()
    }

    pub fn redirects(&self) -> Vec<String> {
        lock(&self.redirects).clone()
    }
}

impl Presenter for UiFeedback {
    fn show_loading(&self, scope: &str, message: &str) {
        tracing::debug!(scope = %scope, message = %message, "Loading");
        // A fresh attempt clears the previous error panel
        lock(&self.scope_errors).remove(scope);
        self.loading.show(scope, message);
    }

    fn hide_loading(&self, scope: &str) {
        tracing::debug!(scope = %scope, "Loading finished");
        self.loading.hide(scope);
    }

    fn show_notification(&self, message: &str, severity: Severity) {
        tracing::info!(severity = %severity, message = %message, "Notification");
        self.notifications.push(message, severity);
    }

    fn render_field_error(&self, field: &str, message: Option<&str>) {
        let mut errors = lock(&self.field_errors);
        match message {
            Some(message) => {
                errors.insert(field.to_string(), message.to_string());
            }
            None => {
                errors.remove(field);
            }
        }
    }

    fn render_scope_error(&self, scope: &str, message: &str) {
        lock(&self.scope_errors).insert(scope.to_string(), message.to_string());
    }

    fn redirect(&self, target: &str) {
        tracing::info!(target = %target, "Redirect requested");
        lock(&self.redirects).push(target.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_error_with_scope() {
        let ui = UiFeedback::new();
        ui.handle_error(Some("Invalid credentials"), Some("signinForm"));

        assert_eq!(ui.scope_error("signinForm").as_deref(), Some("Invalid credentials"));
        let latest = ui.notifications().latest().unwrap();
        assert_eq!(latest.message, "Invalid credentials");
        assert_eq!(latest.severity, Severity::Error);
    }

    #[test]
    fn test_handle_error_default_message() {
        let ui = UiFeedback::new();
        ui.handle_error(None, None);
        ui.handle_error(Some(""), None);

        let active = ui.notifications().active();
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|n| n.message == DEFAULT_ERROR_MESSAGE));
    }

    #[test]
    fn test_field_error_render_and_clear() {
        let ui = UiFeedback::new();
        ui.render_field_error("email", Some("Please enter a valid email address"));
        assert!(ui.field_error("email").is_some());

        ui.render_field_error("email", None);
        assert!(ui.field_error("email").is_none());
    }

    #[test]
    fn test_loading_clears_scope_error() {
        let ui = UiFeedback::new();
        ui.render_scope_error("joinForm", "Email taken");
        ui.show_loading("joinForm", "Creating account...");

        assert!(ui.scope_error("joinForm").is_none());
        assert!(ui.loading().is_loading("joinForm"));
        ui.hide_loading("joinForm");
        assert!(!ui.loading().is_loading("joinForm"));
    }

    #[test]
    fn test_redirects() {
        let ui = UiFeedback::new();
        ui.redirect("index.html");
        assert_eq!(ui.last_redirect().as_deref(), Some("index.html"));
        assert_eq!(ui.redirects().len(), 1);
    }
}
