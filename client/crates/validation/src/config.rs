//! Validation Configuration

use std::str::FromStr;

use thiserror::Error;

/// Environment variable selecting the unknown-rule policy
pub const VALIDATION_MODE_ENV: &str = "VALIDATION_MODE";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationConfigError {
    #[error("Unknown validation mode: {0} (expected `lenient` or `strict`)")]
    UnknownMode(String),
}

/// What to do with a rule name that is not in the rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownRulePolicy {
    /// Skip it as if it passed
    #[default]
    Lenient,
    /// Fail the field, so typos in rule lists surface
    Strict,
}

impl FromStr for UnknownRulePolicy {
    type Err = ValidationConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(UnknownRulePolicy::Lenient),
            "strict" => Ok(UnknownRulePolicy::Strict),
            _ => Err(ValidationConfigError::UnknownMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationConfig {
    pub unknown_rules: UnknownRulePolicy,
}

impl ValidationConfig {
    pub fn strict() -> Self {
        Self {
            unknown_rules: UnknownRulePolicy::Strict,
        }
    }

    /// Read `VALIDATION_MODE`; unset means lenient
    pub fn from_env() -> Result<Self, ValidationConfigError> {
        match std::env::var(VALIDATION_MODE_ENV) {
            Ok(mode) => Ok(Self {
                unknown_rules: mode.parse()?,
            }),
            Err(_) => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_from_str() {
        assert_eq!("strict".parse::<UnknownRulePolicy>().unwrap(), UnknownRulePolicy::Strict);
        assert_eq!(" Lenient ".parse::<UnknownRulePolicy>().unwrap(), UnknownRulePolicy::Lenient);
        assert!(matches!(
            "loose".parse::<UnknownRulePolicy>(),
            Err(ValidationConfigError::UnknownMode(_))
        ));
    }

    #[test]
    fn test_default_is_lenient() {
        assert_eq!(ValidationConfig::default().unknown_rules, UnknownRulePolicy::Lenient);
        assert_eq!(ValidationConfig::strict().unknown_rules, UnknownRulePolicy::Strict);
    }
}
