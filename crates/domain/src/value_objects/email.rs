//! Email address value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::is_empty;
use crate::error::DomainError;

/// An email address that is guaranteed to be non-empty.
///
/// No format check is applied beyond that; the server is the authority on
/// what it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Create a new email.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ArgumentNotProvided` if the value is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if is_empty(&value) {
            return Err(DomainError::argument_not_provided("missing email"));
        }
        Ok(Self(value))
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> String {
        email.0
    }
}
