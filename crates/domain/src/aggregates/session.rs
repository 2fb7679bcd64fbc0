//! Session aggregate - The outcome of a successful login

use crate::value_objects::Email;
use tabletop_domain::SessionId;

/// An authenticated session: who logged in and the access token issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    email: Email,
    token: String,
}

impl Session {
    pub fn new(email: Email, token: impl Into<String>) -> Self {
        Self {
            id: SessionId::new(),
            email,
            token: token.into(),
        }
    }

    #[inline]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    #[inline]
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Access token; empty when the server did not return one.
    #[inline]
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_presence() {
        let email = Email::new("a@b.c").unwrap();
        assert!(Session::new(email.clone(), "t").has_token());
        assert!(!Session::new(email, "").has_token());
    }
}
