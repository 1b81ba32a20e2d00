//! Form Validation
//!
//! Declarative per-field validation for the job board front end.
//!
//! - `rules` - the named rule table (`required`, `email`, `password`, ...)
//! - `field` - evaluates one field's rule list, first failure wins
//! - `form` - validates every field of a form and renders the results
//! - `basic` - the older input-type validator used on plain submit
//! - `strength` - password strength meter (0-5)
//!
//! Field validation failures are never errors: they are reported as a
//! [`FieldOutcome`] and rendered inline.

pub mod basic;
pub mod config;
pub mod field;
pub mod form;
pub mod model;
pub mod rules;
pub mod strength;

// Re-exports for convenience
pub use config::{UnknownRulePolicy, ValidationConfig, ValidationConfigError};
pub use field::{FieldOutcome, FieldValidator};
pub use form::FormValidator;
pub use model::{EmptyForm, Field, FieldState, Form, FormContext, InputKind, ValidationTrigger};
pub use rules::{Rule, RuleSet};
pub use strength::{PasswordStrengthMeter, StrengthLevel};
