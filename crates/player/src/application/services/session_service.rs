//! Session Service - Sign in and sign out
//!
//! Keeps the [`SessionStore`] in step with the server: a successful login
//! stores the email and access token, a logout clears them.

use std::sync::Arc;

use tabletop_domain::{Email, Session};

use crate::application::{ServiceError, SessionStore, SessionUpdate};
use crate::ports::outbound::SessionRepository;

pub struct SessionService {
    repo: Arc<dyn SessionRepository>,
    session: SessionStore,
}

impl SessionService {
    pub fn new(repo: Arc<dyn SessionRepository>, session: SessionStore) -> Self {
        Self { repo, session }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ServiceError> {
        let email = Email::new(email)?;

        let session = self.repo.login(&email, password).await.map_err(|e| {
            let err = ServiceError::from(e);
            tracing::error!(code = err.code(), error = %err, "Login failed");
            err
        })?;

        self.session.set_session(SessionUpdate::from(&session));
        tracing::info!(email = %session.email(), "Signed in");
        Ok(session)
    }

    /// End the session on the server, then locally.
    ///
    /// The local session is cleared even when the server call fails, so the
    /// user is never stuck signed in; the failure is still returned.
    pub async fn logout(&self) -> Result<(), ServiceError> {
        let outcome = self.repo.logout().await.map_err(ServiceError::from);
        self.session.clear_session();

        if let Err(err) = &outcome {
            tracing::error!(code = err.code(), error = %err, "Logout request failed");
        } else {
            tracing::info!("Signed out");
        }
        outcome
    }
}
