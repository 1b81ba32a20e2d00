//! UI Feedback
//!
//! Ephemeral, side-effecting presentation state: loading indicators,
//! notifications, inline field errors and navigation requests.

pub mod loading;
pub mod notification;
pub mod presenter;

// Re-exports
pub use loading::{DEFAULT_LOADING_MESSAGE, LoadingOverlay};
pub use notification::{Notification, NotificationCenter, Severity};
pub use presenter::{DEFAULT_ERROR_MESSAGE, Presenter, UiFeedback};
