//! Rule Table
//!
//! Named, pure predicates over a field value (already trimmed) and the
//! owning form, each paired with the message shown when it fails.
//! Names are case-sensitive.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::FormContext;

// ============================================================================
// Rule names
// ============================================================================

pub const REQUIRED: &str = "required";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const CONFIRM_PASSWORD: &str = "confirmPassword";
pub const PHONE: &str = "phone";
pub const NAME: &str = "name";
pub const COMPANY_NAME: &str = "companyName";
pub const WEBSITE: &str = "website";
pub const SALARY: &str = "salary";
pub const EXPERIENCE: &str = "experience";

/// Sibling field `confirmPassword` compares against
pub const PASSWORD_FIELD: &str = "password";

/// Minimum password length for both password rules
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters that satisfy the strict password's special-character class
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

// ============================================================================
// Patterns
// ============================================================================

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s-]{10,}$").expect("valid phone pattern"));

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s]{2,50}$").expect("valid name pattern"));

static COMPANY_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9\s&.,-]{2,100}$").expect("valid company pattern"));

static WEBSITE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?([0-9a-z.-]+)\.([a-z.]{2,6})([/0-9A-Za-z_ .-]*)*/?$")
        .expect("valid website pattern")
});

// ============================================================================
// Predicates
// ============================================================================

pub(crate) fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub(crate) fn is_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Length in UTF-16 code units, as the browser counts it
pub(crate) fn meets_min_length(value: &str) -> bool {
    value.encode_utf16().count() >= MIN_PASSWORD_LENGTH
}

fn is_all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn required(value: &str, _form: &dyn FormContext) -> bool {
    !value.trim().is_empty()
}

fn email(value: &str, _form: &dyn FormContext) -> bool {
    is_email(value)
}

/// Length plus upper, lower, digit and special character
fn strict_password(value: &str, _form: &dyn FormContext) -> bool {
    meets_min_length(value)
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c))
}

/// Exact match against the sibling `password` field; no sibling never matches
fn confirm_password(value: &str, form: &dyn FormContext) -> bool {
    form.value_of(PASSWORD_FIELD) == Some(value)
}

fn phone(value: &str, _form: &dyn FormContext) -> bool {
    is_phone(value)
}

fn name(value: &str, _form: &dyn FormContext) -> bool {
    NAME_RE.is_match(value)
}

fn company_name(value: &str, _form: &dyn FormContext) -> bool {
    COMPANY_NAME_RE.is_match(value)
}

/// Optional field: empty passes
fn website(value: &str, _form: &dyn FormContext) -> bool {
    value.is_empty() || WEBSITE_RE.is_match(value)
}

/// Whole number greater than zero, of any length
fn salary(value: &str, _form: &dyn FormContext) -> bool {
    is_all_digits(value) && value.bytes().any(|b| b != b'0')
}

fn experience(value: &str, _form: &dyn FormContext) -> bool {
    is_all_digits(value)
}

// ============================================================================
// Rule / RuleSet
// ============================================================================

pub type Predicate = fn(&str, &dyn FormContext) -> bool;

#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub predicate: Predicate,
    pub message: &'static str,
}

impl Rule {
    pub const fn new(name: &'static str, predicate: Predicate, message: &'static str) -> Self {
        Self {
            name,
            predicate,
            message,
        }
    }

    #[inline]
    pub fn check(&self, value: &str, form: &dyn FormContext) -> bool {
        (self.predicate)(value, form)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

const STANDARD_RULES: &[Rule] = &[
    Rule::new(REQUIRED, required, "This field is required"),
    Rule::new(EMAIL, email, "Please enter a valid email address"),
    Rule::new(
        PASSWORD,
        strict_password,
        "Password must be at least 8 characters long and contain uppercase, lowercase, number and special character",
    ),
    Rule::new(CONFIRM_PASSWORD, confirm_password, "Passwords do not match"),
    Rule::new(PHONE, phone, "Please enter a valid phone number"),
    Rule::new(
        NAME,
        name,
        "Name should only contain letters and spaces (2-50 characters)",
    ),
    Rule::new(
        COMPANY_NAME,
        company_name,
        "Company name should be 2-100 characters long",
    ),
    Rule::new(WEBSITE, website, "Please enter a valid website URL"),
    Rule::new(SALARY, salary, "Please enter a valid salary amount"),
    Rule::new(EXPERIENCE, experience, "Please enter a valid number of years"),
];

static STANDARD: Lazy<RuleSet> = Lazy::new(|| RuleSet::new(STANDARD_RULES.to_vec()));

/// Fixed lookup table of rules
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The job board's rule table
    pub fn standard() -> &'static RuleSet {
        &STANDARD
    }

    pub fn lookup(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
