//! User Service - Directory and profile lookups

use std::sync::Arc;

use tabletop_domain::{Page, User};

use crate::application::ServiceError;
use crate::ports::outbound::UserRepository;

pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, page: Page) -> Result<Vec<User>, ServiceError> {
        self.repo.list(&page).await.map_err(|e| {
            let err = ServiceError::from(e);
            tracing::error!(code = err.code(), error = %err, "Failed to list users");
            err
        })
    }

    /// The signed-in user's own profile.
    pub async fn profile(&self) -> Result<User, ServiceError> {
        self.repo.me().await.map_err(|e| {
            let err = ServiceError::from(e);
            tracing::error!(code = err.code(), error = %err, "Failed to load profile");
            err
        })
    }
}
