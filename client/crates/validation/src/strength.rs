//! Password Strength Meter
//!
//! Scores a password 0-5, one point per satisfied check:
//! length >= 8, uppercase, lowercase, digit, non-alphanumeric.

use serde::Serialize;

use crate::rules::meets_min_length;

pub const MAX_STRENGTH: u8 = 5;

#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordStrengthMeter;

impl PasswordStrengthMeter {
    /// Total over all strings; the empty string scores 0
    pub fn score(password: &str) -> u8 {
        let checks = [
            meets_min_length(password),
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_lowercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| !c.is_ascii_alphanumeric()),
        ];
        checks.iter().filter(|&&passed| passed).count() as u8
    }

    /// Score plus display level
    pub fn assess(password: &str) -> StrengthReport {
        let score = Self::score(password);
        StrengthReport {
            score,
            level: StrengthLevel::from_score(score),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    pub score: u8,
    /// `None` for a score of 0
    pub level: Option<StrengthLevel>,
}

/// Display level of a non-zero score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    /// Level for a score in 1..=5; a score of 0 has no level
    pub const fn from_score(score: u8) -> Option<Self> {
        use StrengthLevel::*;
        match score {
            1 => Some(VeryWeak),
            2 => Some(Weak),
            3 => Some(Medium),
            4 => Some(Strong),
            5 => Some(VeryStrong),
            _ => None,
        }
    }

    #[inline]
    pub const fn label(&self) -> &'static str {
        use StrengthLevel::*;
        match self {
            VeryWeak => "Very Weak",
            Weak => "Weak",
            Medium => "Medium",
            Strong => "Strong",
            VeryStrong => "Very Strong",
        }
    }

    /// CSS class toggled on the meter
    #[inline]
    pub const fn css_class(&self) -> &'static str {
        use StrengthLevel::*;
        match self {
            VeryWeak => "very-weak",
            Weak => "weak",
            Medium => "medium",
            Strong => "strong",
            VeryStrong => "very-strong",
        }
    }

    #[inline]
    pub const fn color(&self) -> &'static str {
        use StrengthLevel::*;
        match self {
            VeryWeak => "#ff4444",
            Weak => "#ffbb33",
            Medium => "#ffeb3b",
            Strong => "#00C851",
            VeryStrong => "#007E33",
        }
    }
}
