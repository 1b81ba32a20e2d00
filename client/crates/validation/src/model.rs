//! Form Model
//!
//! A form is an ordered list of named input fields. Each field carries its
//! current value, the rule names assigned to it and the result of its last
//! validation pass.

use std::str::FromStr;

use serde::Serialize;

/// Read access to sibling field values during rule evaluation
pub trait FormContext {
    /// Value of the first field with this name, if any
    fn value_of(&self, name: &str) -> Option<&str>;
}

/// Context for a field validated outside of any form
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyForm;

impl FormContext for EmptyForm {
    fn value_of(&self, _name: &str) -> Option<&str> {
        None
    }
}

/// HTML input type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Password,
    Tel,
    Number,
    Url,
    Select,
    Textarea,
}

impl InputKind {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use InputKind::*;
        match self {
            Text => "text",
            Email => "email",
            Password => "password",
            Tel => "tel",
            Number => "number",
            Url => "url",
            Select => "select",
            Textarea => "textarea",
        }
    }
}

impl FromStr for InputKind {
    type Err = std::convert::Infallible;

    /// Unrecognized types behave like `text`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use InputKind::*;
        Ok(match s.to_ascii_lowercase().as_str() {
            "email" => Email,
            "password" => Password,
            "tel" => Tel,
            "number" => Number,
            "url" => Url,
            "select" => Select,
            "textarea" => Textarea,
            _ => Text,
        })
    }
}

/// UI events that can re-run validation on a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationTrigger {
    /// Field lost focus
    Blur,
    /// Field content changed
    Input,
}

/// Result of the last validation pass over a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldState {
    pub valid: bool,
    pub message: Option<String>,
}

impl Default for FieldState {
    fn default() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub kind: InputKind,
    pub value: String,
    /// Assigned rule names, in evaluation order
    pub rules: Vec<String>,
    /// Marked as required for the input-type validator
    pub required: bool,
    pub state: FieldState,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: InputKind) -> Self {
        Self {
            name: name.into(),
            kind,
            value: String::new(),
            rules: Vec::new(),
            required: false,
            state: FieldState::default(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Assign rules from a space-separated attribute, e.g. `"required email"`
    pub fn with_rules(mut self, attribute: &str) -> Self {
        self.rules = parse_rule_names(attribute);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Whether the declarative validator looks at this field
    pub fn is_validated(&self) -> bool {
        !self.rules.is_empty()
    }

    /// Whether `trigger` should re-validate this field in real time
    ///
    /// Every validated field re-runs on blur; password fields also on
    /// each input change.
    pub fn revalidates_on(&self, trigger: ValidationTrigger) -> bool {
        if !self.is_validated() {
            return false;
        }
        match trigger {
            ValidationTrigger::Blur => true,
            ValidationTrigger::Input => self.kind == InputKind::Password,
        }
    }
}

/// Split a rule attribute into names; repeated spaces yield no empty names
pub fn parse_rule_names(attribute: &str) -> Vec<String> {
    attribute.split_whitespace().map(str::to_string).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pub fields: Vec<Field>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Update a field's value; returns `false` if no such field
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.field_mut(name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Fields whose last validation failed
    pub fn invalid_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.state.valid)
    }
}

impl FormContext for Form {
    fn value_of(&self, name: &str) -> Option<&str> {
        self.field(name).map(|f| f.value.as_str())
    }
}
