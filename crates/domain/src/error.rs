//! Unified error types for the domain layer
//!
//! Every failure a domain operation can report maps to one of these variants.
//! Each variant carries a stable machine-readable code (see [`DomainError::code`])
//! so the UI can branch on the kind of failure without matching on messages.

use thiserror::Error;

/// Code for an argument that was provided but is not acceptable.
pub const ARGUMENT_INVALID: &str = "GENERIC.ARGUMENT_INVALID";

/// Code for an argument that is missing or empty.
pub const ARGUMENT_NOT_PROVIDED: &str = "GENERIC.ARGUMENT_NOT_PROVIDED";

/// Code for a registration whose email is already taken.
pub const EMAIL_IN_USE: &str = "REGISTRATION.EMAIL_ALREADY_IN_USE";

/// Code for anything that does not fall under the other variants.
pub const UNEXPECTED_ERROR: &str = "GENERIC.UNEXPECTED_ERROR";

const DEFAULT_UNEXPECTED_MESSAGE: &str = "Unexpected error";

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument was provided but failed validation
    #[error("Invalid argument: {0}")]
    ArgumentInvalid(String),

    /// An argument was missing or empty (empty string, empty collection, ...)
    #[error("Argument not provided: {0}")]
    ArgumentNotProvided(String),

    /// The email used for registration already belongs to an account
    #[error("Email already in use: {0}")]
    EmailInUse(String),

    /// Catch-all for unrecognized server statuses and unhandled failures
    #[error("{0}")]
    Unexpected(String),
}

impl DomainError {
    /// Creates an invalid-argument error.
    ///
    /// Use this when a value is present but outside what the domain accepts,
    /// e.g. a page size above the server limit.
    pub fn argument_invalid(msg: impl Into<String>) -> Self {
        Self::ArgumentInvalid(msg.into())
    }

    /// Creates a not-provided error.
    ///
    /// # Example
    /// ```ignore
    /// if is_empty(value) {
    ///     return Err(DomainError::argument_not_provided("missing email"));
    /// }
    /// ```
    pub fn argument_not_provided(msg: impl Into<String>) -> Self {
        Self::ArgumentNotProvided(msg.into())
    }

    /// Create an email-in-use conflict
    pub fn email_in_use(msg: impl Into<String>) -> Self {
        Self::EmailInUse(msg.into())
    }

    /// Create an unexpected error with a custom message
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }

    /// Stable code identifying the kind of failure.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ArgumentInvalid(_) => ARGUMENT_INVALID,
            Self::ArgumentNotProvided(_) => ARGUMENT_NOT_PROVIDED,
            Self::EmailInUse(_) => EMAIL_IN_USE,
            Self::Unexpected(_) => UNEXPECTED_ERROR,
        }
    }
}

impl Default for DomainError {
    fn default() -> Self {
        Self::Unexpected(DEFAULT_UNEXPECTED_MESSAGE.to_string())
    }
}
