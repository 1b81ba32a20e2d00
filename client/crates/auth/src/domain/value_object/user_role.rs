//! Well-known role codes
//!
//! Roles stay plain strings on [`crate::domain::User`]: the API may add
//! roles without a client release, and role checks are exact,
//! case-sensitive string comparisons.

/// Job seeker
pub const SEEKER: &str = "seeker";

/// Employer posting jobs
pub const EMPLOYER: &str = "employer";
