//! Session policy.

/// How the security layer treats server-side sessions.
///
/// Only the stateless policy exists: no session object is ever created or
/// consulted, no response sets a session cookie, and every request
/// authenticates independently from its own `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPolicy {
    /// Never create or read a session.
    #[default]
    Stateless,
}
