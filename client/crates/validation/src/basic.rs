//! Input-Type Validator
//!
//! The older validator used on plain form submission. It looks only at
//! fields flagged `required` and picks a check from the input type.
//!
//! Its password check is deliberately weaker than the `password` rule in
//! [`crate::rules`]: length only, no composition requirement. The two are
//! used in different flows and must not be merged.

use platform::feedback::Presenter;

use crate::field::FieldOutcome;
use crate::model::{Form, InputKind};
use crate::rules::{is_email, is_phone, meets_min_length};

pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PASSWORD_MESSAGE: &str = "Password must be at least 8 characters long";
pub const PHONE_MESSAGE: &str = "Please enter a valid phone number";
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Check one value by input type; the value is trimmed first
pub fn validate_input(kind: InputKind, value: &str) -> FieldOutcome {
    let value = value.trim();
    let (valid, message) = match kind {
        InputKind::Email => (is_email(value), EMAIL_MESSAGE),
        InputKind::Password => (meets_min_length(value), PASSWORD_MESSAGE),
        InputKind::Tel => (is_phone(value), PHONE_MESSAGE),
        _ => (!value.is_empty(), REQUIRED_MESSAGE),
    };

    if valid {
        FieldOutcome::passed()
    } else {
        FieldOutcome::failed(message)
    }
}

/// Check every required field; `true` iff none failed
pub fn validate_required(form: &mut Form) -> bool {
    let mut valid = true;
    for field in form.fields.iter_mut().filter(|f| f.required) {
        let outcome = validate_input(field.kind, &field.value);
        valid &= outcome.valid;
        field.state = outcome.into();
    }
    valid
}

/// [`validate_required`], then render each required field's result
pub fn validate_required_and_render<P>(form: &mut Form, presenter: &P) -> bool
where
    P: Presenter + ?Sized,
{
    let valid = validate_required(form);
    for field in form.fields.iter().filter(|f| f.required) {
        presenter.render_field_error(&field.name, field.state.message.as_deref());
    }
    valid
}
