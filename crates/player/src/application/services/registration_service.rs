//! Registration Service - Account creation

use std::sync::Arc;

use tabletop_domain::{Email, Registration};

use crate::application::ServiceError;
use crate::ports::outbound::RegistrationRepository;

pub struct RegistrationService {
    repo: Arc<dyn RegistrationRepository>,
}

impl RegistrationService {
    pub fn new(repo: Arc<dyn RegistrationRepository>) -> Self {
        Self { repo }
    }

    /// Create an account.
    ///
    /// Fails with `DomainError::ArgumentNotProvided` before any request is
    /// made when either field is empty, and with `DomainError::EmailInUse`
    /// when the server already knows the address.
    pub async fn register(&self, email: &str, password: &str) -> Result<(), ServiceError> {
        let registration = Registration::new(Email::new(email)?, password)?;

        self.repo.register(&registration).await.map_err(|e| {
            let err = ServiceError::from(e);
            tracing::error!(code = err.code(), error = %err, "Registration failed");
            err
        })?;

        tracing::info!(registration_id = %registration.id(), "Registration created");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{MockRegistrationRepository, RepoError};
    use tabletop_domain::DomainError;

    #[tokio::test]
    async fn registers_valid_input() {
        let mut repo = MockRegistrationRepository::new();
        repo.expect_register()
            .withf(|r| r.email().as_str() == "ada@example.com" && r.password() == "pw")
            .times(1)
            .returning(|_| Ok(()));

        let service = RegistrationService::new(Arc::new(repo));
        assert!(service.register("ada@example.com", "pw").await.is_ok());
    }

    #[tokio::test]
    async fn empty_fields_fail_before_calling_the_server() {
        let mut repo = MockRegistrationRepository::new();
        repo.expect_register().times(0);
        let service = RegistrationService::new(Arc::new(repo));

        for (email, password) in [("", "pw"), ("ada@example.com", "")] {
            let err = service.register(email, password).await.unwrap_err();
            assert!(matches!(
                err,
                ServiceError::Domain(DomainError::ArgumentNotProvided(_))
            ));
        }
    }

    #[tokio::test]
    async fn email_in_use_is_surfaced() {
        let mut repo = MockRegistrationRepository::new();
        repo.expect_register()
            .returning(|_| Err(RepoError::from(DomainError::email_in_use("taken"))));

        let err = RegistrationService::new(Arc::new(repo))
            .register("ada@example.com", "pw")
            .await
            .unwrap_err();
        assert_eq!(err.code(), "REGISTRATION.EMAIL_ALREADY_IN_USE");
    }
}
