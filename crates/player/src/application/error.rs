//! Error type returned by application services to the UI.

use tabletop_domain::DomainError;

use crate::ports::outbound::{HttpClientError, RepoError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServiceError {
    /// Validation failure or a domain outcome reported by the server.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The request never got an answer.
    #[error(transparent)]
    Http(#[from] HttpClientError),
}

impl ServiceError {
    /// Stable machine-readable code, for logs and UI lookups.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Domain(err) => err.code(),
            ServiceError::Http(_) => "HTTP.TRANSPORT_ERROR",
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Domain(e) => ServiceError::Domain(e),
            RepoError::Http(e) => ServiceError::Http(e),
        }
    }
}
