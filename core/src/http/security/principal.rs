//! The authenticated identity.

use std::fmt;

/// An authenticated caller, produced by an
/// [`AuthenticationProvider`](super::provider::AuthenticationProvider) and
/// stored in request extensions for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    name: String,
}

impl Principal {
    pub fn new(name: impl Into<String>) -> Self {
        Principal { name: name.into() }
    }

    /// The principal's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
