//! User aggregate - A registered account as seen by the client

use crate::value_objects::{Email, FullName};
use tabletop_domain::UserId;

/// A registered user.
///
/// # Example
///
/// ```
/// use tabletop_domain::aggregates::User;
/// use tabletop_domain::value_objects::{Email, FullName};
///
/// let user = User::new(
///     Email::new("ada@example.com").unwrap(),
///     FullName::new("Ada", "Lovelace", "").unwrap(),
/// );
/// assert_eq!(user.email().as_str(), "ada@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    email: Email,
    fullname: FullName,
}

impl User {
    /// Create a user that has not been persisted yet.
    pub fn new(email: Email, fullname: FullName) -> Self {
        Self {
            id: UserId::new(),
            email,
            fullname,
        }
    }

    /// Rebuild a user from server data.
    pub fn from_parts(id: UserId, email: Email, fullname: FullName) -> Self {
        Self { id, email, fullname }
    }

    #[inline]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    #[inline]
    pub fn email(&self) -> &Email {
        &self.email
    }

    #[inline]
    pub fn fullname(&self) -> &FullName {
        &self.fullname
    }
}
