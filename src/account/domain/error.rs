//! Error types for account domain validation.

use thiserror::Error;

/// Errors returned while constructing or changing account values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountDomainError {
    /// The username is empty after trimming.
    #[error("username must not be empty")]
    EmptyUsername,

    /// A required password field is empty.
    #[error("password must not be empty")]
    EmptyPassword,

    /// The new password and its confirmation differ.
    #[error("new password and confirmation do not match")]
    PasswordMismatch,

    /// The uploaded photo does not carry an accepted image extension.
    #[error("unsupported photo file '{0}', expected png, jpg, jpeg or gif")]
    UnsupportedPhotoType(String),

    /// A stored password hash is not in `pbkdf2:iterations:salt:hash` form.
    #[error("malformed password hash")]
    MalformedPasswordHash,

    /// The account identifier is not a UUID.
    #[error("invalid account identifier '{0}'")]
    InvalidAccountId(String),
}
