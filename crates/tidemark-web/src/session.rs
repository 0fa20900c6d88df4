//! Per-request session view.

use std::collections::HashMap;

/// Read-only view of the session for one request lifecycle.
///
/// Routing only consults the session to seed default route parameters — for
/// instance the logged-in user id bound onto user pages. Real session
/// storage lives outside this crate.
#[derive(Debug, Clone, Default)]
pub struct Session {
    values: HashMap<String, String>,
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, for assembling demo and test sessions.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Gets a session value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}
