//! Registration aggregate - A pending sign-up request

use crate::common::is_empty;
use crate::error::DomainError;
use crate::value_objects::Email;
use tabletop_domain::RegistrationId;

/// Credentials submitted to create an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    id: RegistrationId,
    email: Email,
    password: String,
}

impl Registration {
    /// Create a registration request.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ArgumentNotProvided` if `password` is empty.
    pub fn new(email: Email, password: impl Into<String>) -> Result<Self, DomainError> {
        Self::from_parts(RegistrationId::new(), email, password)
    }

    pub fn from_parts(
        id: RegistrationId,
        email: Email,
        password: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let password = password.into();
        if is_empty(&password) {
            return Err(DomainError::argument_not_provided("missing password"));
        }
        Ok(Self {
            id,
            email,
            password,
        })
    }

    #[inline]
    pub fn id(&self) -> &RegistrationId {
        &self.id
    }

    #[inline]
    pub fn email(&self) -> &Email {
        &self.email
    }

    #[inline]
    pub fn password(&self) -> &str {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_a_password() {
        let email = Email::new("a@b.c").unwrap();
        assert!(matches!(
            Registration::new(email.clone(), ""),
            Err(DomainError::ArgumentNotProvided(_))
        ));
        let reg = Registration::new(email, "secret").unwrap();
        assert_eq!(reg.password(), "secret");
    }
}
