//! Credential validation.

use std::collections::HashMap;

use crate::http::security::principal::Principal;

/// Validates Basic credentials and produces the caller's identity.
///
/// The filter chain parses the `Authorization` header and delegates
/// everything past that point here; credential storage and lookup never
/// leak into the chain itself.
pub trait AuthenticationProvider: Send + Sync {
    /// Returns the principal when the credentials are valid.
    fn authenticate(&self, username: &str, password: &str) -> Option<Principal>;
}

/// Username/password map for demos and tests.
///
/// # Example
/// ```rust
/// use portcullis_core::http::security::provider::{AuthenticationProvider, InMemoryProvider};
///
/// let provider = InMemoryProvider::new().with_user("foo", "bar");
/// assert!(provider.authenticate("foo", "bar").is_some());
/// assert!(provider.authenticate("foo", "nope").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    users: HashMap<String, String>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a user; a repeated username keeps the first password.
    pub fn with_user(mut self, username: &str, password: &str) -> Self {
        use std::collections::hash_map::Entry;
        match self.users.entry(username.to_string()) {
            Entry::Occupied(entry) => {
                log::warn!("user {} already registered, keeping the first entry", entry.key());
            }
            Entry::Vacant(entry) => {
                entry.insert(password.to_string());
            }
        }
        self
    }
}

impl AuthenticationProvider for InMemoryProvider {
    fn authenticate(&self, username: &str, password: &str) -> Option<Principal> {
        match self.users.get(username) {
            Some(stored) if stored == password => Some(Principal::new(username)),
            _ => None,
        }
    }
}
