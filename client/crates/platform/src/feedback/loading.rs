//! Loading Overlay
//!
//! Tracks which scopes (forms, page regions) currently show a spinner.

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::sync::lock;

/// Message shown when the caller gives none
pub const DEFAULT_LOADING_MESSAGE: &str = "Loading...";

/// Per-scope loading state
#[derive(Debug, Default)]
pub struct LoadingOverlay {
    scopes: Mutex<BTreeMap<String, String>>,
}

impl LoadingOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a scope into the loading state
    ///
    /// An empty message falls back to [`DEFAULT_LOADING_MESSAGE`].
    pub fn show(&self, scope: &str, message: &str) {
        let message = if message.is_empty() {
            DEFAULT_LOADING_MESSAGE
        } else {
            message
        };
        lock(&self.scopes).insert(scope.to_string(), message.to_string());
    }

    /// Restore a scope; returns `false` if it was not loading
    pub fn hide(&self, scope: &str) -> bool {
        lock(&self.scopes).remove(scope).is_some()
    }

    pub fn is_loading(&self, scope: &str) -> bool {
        lock(&self.scopes).contains_key(scope)
    }

    pub fn message(&self, scope: &str) -> Option<String> {
        lock(&self.scopes).get(scope).cloned()
    }
}
