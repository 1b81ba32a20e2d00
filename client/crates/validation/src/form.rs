//! Form Validator
//!
//! Validates every validated field of a form. There is no short-circuit
//! across fields: every field's state is refreshed even after the first
//! failure, so all errors can be rendered at once.

use platform::feedback::Presenter;

use crate::config::ValidationConfig;
use crate::field::{FieldOutcome, FieldValidator};
use crate::model::{Form, ValidationTrigger};

#[derive(Debug, Clone)]
pub struct FormValidator<'r> {
    fields: FieldValidator<'r>,
}

impl Default for FormValidator<'static> {
    fn default() -> Self {
        Self::new(&ValidationConfig::default())
    }
}

impl FormValidator<'static> {
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            fields: FieldValidator::new(config),
        }
    }
}

impl<'r> FormValidator<'r> {
    pub fn with_field_validator(fields: FieldValidator<'r>) -> Self {
        Self { fields }
    }

    pub fn field_validator(&self) -> &FieldValidator<'r> {
        &self.fields
    }

    /// Validate all fields; `true` iff none failed
    pub fn validate(&self, form: &mut Form) -> bool {
        let outcomes: Vec<(usize, FieldOutcome)> = form
            .fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.is_validated())
            .map(|(index, field)| (index, self.fields.validate(&field.value, &field.rules, &*form)))
            .collect();

        let mut valid = true;
        for (index, outcome) in outcomes {
            valid &= outcome.valid;
            form.fields[index].state = outcome.into();
        }

        tracing::debug!(
            valid,
            invalid_fields = form.invalid_fields().count(),
            "Form validated"
        );
        valid
    }

    /// Validate all fields, then render every field's error or clear it
    pub fn validate_and_render<P>(&self, form: &mut Form, presenter: &P) -> bool
    where
        P: Presenter + ?Sized,
    {
        let valid = self.validate(form);
        for field in form.fields.iter().filter(|f| f.is_validated()) {
            presenter.render_field_error(&field.name, field.state.message.as_deref());
        }
        valid
    }

    /// Re-validate one field by name and store its state
    pub fn validate_field(&self, form: &mut Form, name: &str) -> Option<FieldOutcome> {
        let index = form.position(name)?;
        let field = &form.fields[index];
        let outcome = self.fields.validate(&field.value, &field.rules, &*form);
        form.fields[index].state = outcome.clone().into();
        Some(outcome)
    }

    /// Real-time validation hook for a UI event on one field
    ///
    /// Returns `None` when the event does not re-validate that field.
    pub fn on_event<P>(
        &self,
        form: &mut Form,
        name: &str,
        trigger: ValidationTrigger,
        presenter: &P,
    ) -> Option<bool>
    where
        P: Presenter + ?Sized,
    {
        if !form.field(name)?.revalidates_on(trigger) {
            return None;
        }
        let outcome = self.validate_field(form, name)?;
        presenter.render_field_error(name, outcome.message.as_deref());
        Some(outcome.valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Field, InputKind};
    use platform::feedback::UiFeedback;

    fn sign_up_form() -> Form {
        Form::new()
            .with_field(
                Field::new("firstName", InputKind::Text)
                    .with_value("Jane")
                    .with_rules("required name"),
            )
            .with_field(
                Field::new("email", InputKind::Email)
                    .with_value("jane@example.com")
                    .with_rules("required email"),
            )
            .with_field(
                Field::new("password", InputKind::Password)
                    .with_value("Secret#123")
                    .with_rules("required password"),
            )
            .with_field(
                Field::new("confirmPassword", InputKind::Password)
                    .with_value("Secret#123")
                    .with_rules("required confirmPassword"),
            )
            .with_field(Field::new("notes", InputKind::Textarea).with_value(""))
    }

    #[test]
    fn test_valid_form() {
        let mut form = sign_up_form();
        assert!(FormValidator::default().validate(&mut form));
        assert_eq!(form.invalid_fields().count(), 0);
    }

    #[test]
    fn test_every_field_evaluated() {
        let mut form = sign_up_form();
        form.set_value("email", "not-an-email");
        form.set_value("confirmPassword", "Secret#999");

        let ui = UiFeedback::new();
        assert!(!FormValidator::default().validate_and_render(&mut form, &ui));

        let email = form.field("email").unwrap();
        assert_eq!(email.state.message.as_deref(), Some("Please enter a valid email address"));
        let confirm = form.field("confirmPassword").unwrap();
        assert_eq!(confirm.state.message.as_deref(), Some("Passwords do not match"));

        assert_eq!(
            ui.field_error("email").as_deref(),
            Some("Please enter a valid email address")
        );
        assert_eq!(ui.field_error("confirmPassword").as_deref(), Some("Passwords do not match"));
        assert!(ui.field_error("firstName").is_none());
        assert_eq!(form.invalid_fields().count(), 2);
    }

    #[test]
    fn test_errors_clear_after_fix() {
        let mut form = sign_up_form();
        form.set_value("email", "broken");
        let ui = UiFeedback::new();
        let validator = FormValidator::default();

        assert!(!validator.validate_and_render(&mut form, &ui));
        form.set_value("email", "jane@example.com");
        assert!(validator.validate_and_render(&mut form, &ui));
        assert!(ui.field_errors().is_empty());
    }

    #[test]
    fn test_unvalidated_fields_ignored() {
        let mut form = Form::new().with_field(Field::new("notes", InputKind::Textarea));
        assert!(FormValidator::default().validate(&mut form));
        assert!(form.field("notes").unwrap().state.valid);
    }

    #[test]
    fn test_on_event_triggers() {
        let mut form = sign_up_form();
        form.set_value("email", "broken");
        form.set_value("password", "weak");
        let ui = UiFeedback::new();
        let validator = FormValidator::default();

        assert_eq!(validator.on_event(&mut form, "email", ValidationTrigger::Input, &ui), None);
        assert!(ui.field_error("email").is_none());

        assert_eq!(validator.on_event(&mut form, "email", ValidationTrigger::Blur, &ui), Some(false));
        assert!(ui.field_error("email").is_some());

        assert_eq!(
            validator.on_event(&mut form, "password", ValidationTrigger::Input, &ui),
            Some(false)
        );
        assert_eq!(validator.on_event(&mut form, "missing", ValidationTrigger::Blur, &ui), None);
    }

    #[test]
    fn test_validate_field_updates_state() {
        let mut form = sign_up_form();
        form.set_value("firstName", "J4ne");
        let validator = FormValidator::default();

        let outcome = validator.validate_field(&mut form, "firstName").unwrap();
        assert!(!outcome.valid);
        assert!(!form.field("firstName").unwrap().state.valid);
        assert!(validator.validate_field(&mut form, "unknown").is_none());
    }
}
