//! Field Validator
//!
//! Runs a field's rules in order and stops at the first failure. Only
//! that failure's message is surfaced; whether the field fails does not
//! depend on the order.

use serde::Serialize;

use crate::config::{UnknownRulePolicy, ValidationConfig};
use crate::model::{FieldState, FormContext};
use crate::rules::RuleSet;

/// Pass/fail for one field, with the message to render on failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOutcome {
    pub valid: bool,
    pub message: Option<String>,
}

impl FieldOutcome {
    pub fn passed() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    /// Message or empty string, for display
    pub fn message_or_empty(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }
}

impl From<FieldOutcome> for FieldState {
    fn from(outcome: FieldOutcome) -> Self {
        FieldState {
            valid: outcome.valid,
            message: outcome.message,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FieldValidator<'r> {
    rules: &'r RuleSet,
    unknown_rules: UnknownRulePolicy,
}

impl Default for FieldValidator<'static> {
    fn default() -> Self {
        Self::new(&ValidationConfig::default())
    }
}

impl FieldValidator<'static> {
    /// Validator over the standard rule table
    pub fn new(config: &ValidationConfig) -> Self {
        Self::with_rules(RuleSet::standard(), config)
    }
}

impl<'r> FieldValidator<'r> {
    pub fn with_rules(rules: &'r RuleSet, config: &ValidationConfig) -> Self {
        Self {
            rules,
            unknown_rules: config.unknown_rules,
        }
    }

    pub fn rules(&self) -> &'r RuleSet {
        self.rules
    }

    /// Validate a value against rule names, in order
    ///
    /// The value is trimmed before any rule sees it. Unknown rule names are
    /// skipped under the lenient policy and fail the field under the strict
    /// one.
    pub fn validate<S: AsRef<str>>(
        &self,
        value: &str,
        rule_names: &[S],
        form: &dyn FormContext,
    ) -> FieldOutcome {
        let value = value.trim();

        for name in rule_names {
            let name = name.as_ref();
            match self.rules.lookup(name) {
                Some(rule) => {
                    if !rule.check(value, form) {
                        return FieldOutcome::failed(rule.message);
                    }
                }
                None => match self.unknown_rules {
                    UnknownRulePolicy::Lenient => {
                        tracing::trace!(rule = %name, "Skipping unknown validation rule");
                    }
                    UnknownRulePolicy::Strict => {
                        tracing::warn!(rule = %name, "Unknown validation rule");
                        return FieldOutcome::failed(format!("Unknown validation rule: {name}"));
                    }
                },
            }
        }

        FieldOutcome::passed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EmptyForm, Field, Form, InputKind};
    use crate::rules::Rule;

    #[test]
    fn test_all_rules_pass() {
        let validator = FieldValidator::default();
        let outcome = validator.validate("jane@example.com", &["required", "email"], &EmptyForm);
        assert_eq!(outcome, FieldOutcome::passed());
        assert_eq!(outcome.message_or_empty(), "");
    }

    #[test]
    fn test_first_failure_wins() {
        let validator = FieldValidator::default();
        let outcome = validator.validate("   ", &["required", "email"], &EmptyForm);
        assert!(!outcome.valid);
        assert_eq!(outcome.message.as_deref(), Some("This field is required"));

        let outcome = validator.validate("   ", &["email", "required"], &EmptyForm);
        assert_eq!(outcome.message.as_deref(), Some("Please enter a valid email address"));
    }

    #[test]
    fn test_value_is_trimmed() {
        let validator = FieldValidator::default();
        assert!(validator.validate("  jane@example.com  ", &["email"], &EmptyForm).valid);
        assert!(validator.validate(" 42 ", &["salary"], &EmptyForm).valid);
    }

    #[test]
    fn test_confirm_password_uses_form() {
        let form = Form::new()
            .with_field(Field::new("password", InputKind::Password).with_value("Secret#123"));
        let validator = FieldValidator::default();

        assert!(validator.validate("Secret#123", &["confirmPassword"], &form).valid);
        let outcome = validator.validate("Secret#124", &["confirmPassword"], &form);
        assert_eq!(outcome.message.as_deref(), Some("Passwords do not match"));
    }

    #[test]
    fn test_unknown_rule_lenient() {
        let validator = FieldValidator::default();
        assert!(validator.validate("", &["emial"], &EmptyForm).valid);
        assert!(!validator.validate("", &["emial", "required"], &EmptyForm).valid);
    }

    #[test]
    fn test_unknown_rule_strict() {
        let validator = FieldValidator::new(&ValidationConfig::strict());
        let outcome = validator.validate("jane@example.com", &["emial"], &EmptyForm);
        assert!(!outcome.valid);
        assert_eq!(outcome.message.as_deref(), Some("Unknown validation rule: emial"));
    }

    #[test]
    fn test_custom_rule_set() {
        fn short(value: &str, _form: &dyn FormContext) -> bool {
            value.len() <= 3
        }
        let rules = RuleSet::new(vec![Rule::new("short", short, "Too long")]);
        let validator = FieldValidator::with_rules(&rules, &ValidationConfig::default());

        assert!(validator.validate("abc", &["short"], &EmptyForm).valid);
        assert!(!validator.validate("abcd", &["short"], &EmptyForm).valid);
        // standard rules are not part of a custom table
        assert!(validator.validate("", &["required"], &EmptyForm).valid);
    }

    #[test]
    fn test_no_rules_passes() {
        let validator = FieldValidator::default();
        let none: [&str; 0] = [];
        assert!(validator.validate("", &none, &EmptyForm).valid);
    }
}
