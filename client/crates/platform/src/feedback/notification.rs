//! Notification Center
//!
//! Toast-style messages that expire on their own after a fixed lifetime.

use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sync::lock;

/// Default time a notification stays visible
pub const NOTIFICATION_LIFETIME_MS: i64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use Severity::*;
        match self {
            Info => "info",
            Success => "success",
            Warning => "warning",
            Error => "error",
        }
    }

    /// Font Awesome icon class for the toast
    #[inline]
    pub const fn icon(&self) -> &'static str {
        use Severity::*;
        match self {
            Success => "fa-check-circle",
            Error => "fa-exclamation-circle",
            Warning => "fa-exclamation-triangle",
            Info => "fa-info-circle",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Severity {
    type Err = std::convert::Infallible;

    /// Unknown codes read as `Info`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Info,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Notification {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[derive(Debug)]
pub struct NotificationCenter {
    lifetime: Duration,
    entries: Mutex<Vec<Notification>>,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::with_lifetime(Duration::milliseconds(NOTIFICATION_LIFETIME_MS))
    }
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lifetime(lifetime: Duration) -> Self {
        Self {
            lifetime,
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Queue a notification and return its id; expired entries are dropped
    pub fn push(&self, message: impl Into<String>, severity: Severity) -> Uuid {
        self.push_at(message, severity, Utc::now())
    }

    pub fn push_at(
        &self,
        message: impl Into<String>,
        severity: Severity,
        now: DateTime<Utc>,
    ) -> Uuid {
        let notification = Notification {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
            created_at: now,
            expires_at: now + self.lifetime,
        };
        let id = notification.id;
        let mut entries = lock(&self.entries);
        entries.retain(|n| !n.is_expired_at(now));
        entries.push(notification);
        id
    }

    /// Close a notification early
    pub fn dismiss(&self, id: Uuid) -> bool {
        let mut entries = lock(&self.entries);
        let before = entries.len();
        entries.retain(|n| n.id != id);
        entries.len() != before
    }

    /// Visible notifications, oldest first
    pub fn active(&self) -> Vec<Notification> {
        self.active_at(Utc::now())
    }

    /// Visible notifications at `now`; expired ones are dropped
    pub fn active_at(&self, now: DateTime<Utc>) -> Vec<Notification> {
        let mut entries = lock(&self.entries);
        entries.retain(|n| !n.is_expired_at(now));
        entries.clone()
    }

    /// Most recent notification, expired or not
    pub fn latest(&self) -> Option<Notification> {
        lock(&self.entries).last().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_icons() {
        assert_eq!(Severity::Success.icon(), "fa-check-circle");
        assert_eq!(Severity::Error.icon(), "fa-exclamation-circle");
        assert_eq!(Severity::Warning.icon(), "fa-exclamation-triangle");
        assert_eq!(Severity::Info.icon(), "fa-info-circle");
    }

    #[test]
    fn test_severity_from_str() {
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("debug".parse::<Severity>().unwrap(), Severity::Info);
    }

    #[test]
    fn test_auto_expiry() {
        let center = NotificationCenter::new();
        let now = Utc::now();
        center.push_at("Successfully signed in!", Severity::Success, now);

        assert_eq!(center.active_at(now + Duration::milliseconds(4_999)).len(), 1);
        assert!(center.active_at(now + Duration::milliseconds(5_000)).is_empty());
    }

    #[test]
    fn test_push_drops_expired() {
        let center = NotificationCenter::new();
        let now = Utc::now();
        for i in 0..3 {
            center.push_at(format!("Old {i}"), Severity::Info, now);
        }

        let later = now + Duration::milliseconds(NOTIFICATION_LIFETIME_MS);
        center.push_at("Fresh", Severity::Success, later);

        assert_eq!(lock(&center.entries).len(), 1);
        assert_eq!(center.latest().unwrap().message, "Fresh");
    }

    #[test]
    fn test_dismiss() {
        let center = NotificationCenter::new();
        let id = center.push("Please sign in to access this page", Severity::Warning);
        center.push("Second", Severity::Info);

        assert!(center.dismiss(id));
        assert!(!center.dismiss(id));
        assert_eq!(center.active().len(), 1);
        assert_eq!(center.latest().unwrap().message, "Second");
    }
}
