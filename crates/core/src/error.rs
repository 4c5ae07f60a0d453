//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure an onboarding operation can produce. The HTTP layer maps
/// each variant to a status code; the `Display` text is what clients see
/// (except for `Internal`, whose detail is only logged).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Registration with an email that is already taken.
    #[error("User already exists with this email")]
    DuplicateEmail,

    /// No account matches the email/credential pair.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No bearer token was supplied.
    #[error("Authentication required")]
    MissingToken,

    /// The bearer token is not a known session.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The account referenced by a session no longer resolves.
    #[error("User not found")]
    AccountNotFound,

    /// The account already completed its profile.
    #[error("Profile already exists")]
    ProfileAlreadyExists,

    /// A value failed validation (e.g. unknown role, out-of-range number).
    #[error("{0}")]
    Validation(String),

    /// Unexpected failure (poisoned lock, serialization bug).
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Stable machine-readable code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::DuplicateEmail => "duplicate_email",
            DomainError::InvalidCredentials => "invalid_credentials",
            DomainError::MissingToken => "missing_token",
            DomainError::InvalidToken => "invalid_token",
            DomainError::AccountNotFound => "account_not_found",
            DomainError::ProfileAlreadyExists => "profile_already_exists",
            DomainError::Validation(_) => "validation_error",
            DomainError::Internal(_) => "internal_error",
        }
    }
}
