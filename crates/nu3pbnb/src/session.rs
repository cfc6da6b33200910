//! Session state for authenticated requests.

use std::fmt;
use std::sync::{Arc, RwLock};

use crate::types::SessionToken;

/// Caller-owned holder for the current session token.
///
/// A `Session` is constructed explicitly by the caller and handed to
/// [`ApiClient::new`](crate::ApiClient::new); there is no hidden global
/// session state. Clones are cheap (internal `Arc`) and share the same token,
/// so the handle the caller keeps observes tokens stored by the client's
/// `login`/`register` calls.
///
/// # Concurrency
///
/// If two calls race while one is storing a token, the last write wins. This
/// is a best-effort single-session client, not a concurrent-session manager.
///
/// # Example
///
/// ```
/// use nu3pbnb::{Session, SessionToken};
///
/// let session = Session::new();
/// assert!(!session.is_authenticated());
///
/// session.set_token(SessionToken::new("jwt-from-login"));
/// assert!(session.is_authenticated());
///
/// session.clear_token();
/// assert!(session.token().is_none());
/// ```
#[derive(Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<Option<SessionToken>>>,
}

impl Session {
    /// Create a new unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session from a previously persisted token.
    pub fn from_token(token: SessionToken) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(token))),
        }
    }

    /// Returns a snapshot of the current token, if one is set.
    pub fn token(&self) -> Option<SessionToken> {
        self.inner.read().unwrap().clone()
    }

    /// Store a token; subsequent requests will carry it.
    pub fn set_token(&self, token: SessionToken) {
        *self.inner.write().unwrap() = Some(token);
    }

    /// Drop the current token; subsequent requests are unauthenticated.
    pub fn clear_token(&self) {
        *self.inner.write().unwrap() = None;
    }

    /// Whether a token is currently set.
    pub fn is_authenticated(&self) -> bool {
        self.inner.read().unwrap().is_some()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unauthenticated() {
        let session = Session::new();
        assert!(session.token().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn set_and_clear_token() {
        let session = Session::new();
        session.set_token(SessionToken::new("abc"));
        assert_eq!(session.token().unwrap().as_str(), "abc");

        session.clear_token();
        assert!(session.token().is_none());
    }

    #[test]
    fn clones_share_state() {
        let session = Session::new();
        let other = session.clone();

        session.set_token(SessionToken::new("shared"));
        assert_eq!(other.token().unwrap().as_str(), "shared");
    }

    #[test]
    fn last_write_wins() {
        let session = Session::new();
        session.set_token(SessionToken::new("first"));
        session.set_token(SessionToken::new("second"));
        assert_eq!(session.token().unwrap().as_str(), "second");
    }

    #[test]
    fn debug_hides_token() {
        let session = Session::from_token(SessionToken::new("super-secret"));
        let debug = format!("{:?}", session);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
