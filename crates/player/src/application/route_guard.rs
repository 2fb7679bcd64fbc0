//! Access check for routes that need a signed-in user.

use super::session_store::{SessionState, SessionStore};

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/signin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
}

impl AuthState {
    pub fn of(session: &SessionState) -> Self {
        if session.is_authenticated() {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected content.
    Allow,
    /// Replace the current location with this path.
    Redirect(&'static str),
}

/// Decide whether a protected route may render for `session`.
///
/// ```
/// use tabletop_player::application::route_guard::{evaluate, GuardDecision};
/// use tabletop_player::application::SessionState;
///
/// let anonymous = SessionState::default();
/// assert_eq!(evaluate(&anonymous), GuardDecision::Redirect("/signin"));
/// ```
pub fn evaluate(session: &SessionState) -> GuardDecision {
    match AuthState::of(session) {
        AuthState::Authenticated => GuardDecision::Allow,
        AuthState::Unauthenticated => GuardDecision::Redirect(LOGIN_PATH),
    }
}

/// Guard bound to a live session store; checked on every render.
#[derive(Clone)]
pub struct RouteGuard {
    session: SessionStore,
}

impl RouteGuard {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }

    pub fn check(&self) -> GuardDecision {
        evaluate(&self.session.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::SessionUpdate;
    use crate::infrastructure::storage::MemoryStorageProvider;
    use std::sync::Arc;

    #[test]
    fn empty_token_redirects_to_sign_in() {
        let session = SessionState {
            email: "a@b.c".into(),
            token: String::new(),
        };
        assert_eq!(evaluate(&session), GuardDecision::Redirect(LOGIN_PATH));
    }

    #[test]
    fn any_token_allows() {
        let session = SessionState {
            email: String::new(),
            token: "t".into(),
        };
        assert_eq!(evaluate(&session), GuardDecision::Allow);
    }

    #[test]
    fn follows_store_changes() {
        let store = SessionStore::new(Arc::new(MemoryStorageProvider::new()));
        let guard = RouteGuard::new(store.clone());
        assert_eq!(guard.check(), GuardDecision::Redirect(LOGIN_PATH));

        store.set_session(SessionUpdate::token("t"));
        assert_eq!(guard.check(), GuardDecision::Allow);

        store.clear_session();
        assert_eq!(guard.check(), GuardDecision::Redirect(LOGIN_PATH));
    }
}
