//! Error type for repository operations.

use tabletop_domain::DomainError;

use super::HttpClientError;

/// Repository failure: either a domain-level outcome decoded from the
/// server's answer, or no answer at all.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Http(#[from] HttpClientError),
}

impl RepoError {
    /// Catch-all for a status the caller gives no meaning to.
    pub fn unexpected_status(status: u16) -> Self {
        Self::Domain(DomainError::unexpected(format!(
            "Unexpected response status: {status}"
        )))
    }

    /// A 200 whose body did not match the expected envelope.
    pub fn malformed(message: impl std::fmt::Display) -> Self {
        Self::Domain(DomainError::unexpected(format!(
            "Malformed response body: {message}"
        )))
    }
}
