//! Repository ports, one per server resource.
//!
//! Implementations translate between domain entities and wire DTOs and give
//! meaning to response statuses.

use tabletop_domain::{Email, Game, Page, Registration, Session, User};

use super::RepoError;

#[cfg_attr(test, mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RegistrationRepository: Send + Sync {
    /// Fails with `DomainError::EmailInUse` when the address is taken.
    async fn register(&self, registration: &Registration) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait SessionRepository: Send + Sync {
    async fn login(&self, email: &Email, password: &str) -> Result<Session, RepoError>;

    async fn logout(&self) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait UserRepository: Send + Sync {
    async fn list(&self, page: &Page) -> Result<Vec<User>, RepoError>;

    /// The user the current session belongs to.
    async fn me(&self) -> Result<User, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait GameRepository: Send + Sync {
    async fn list(&self, page: &Page) -> Result<Vec<Game>, RepoError>;

    async fn create(&self, game: &Game) -> Result<(), RepoError>;
}
