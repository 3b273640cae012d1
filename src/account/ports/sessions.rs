//! Port for issuing and checking session tokens.

use crate::account::domain::AccountId;
use chrono::Duration;
use std::fmt;
use thiserror::Error;

/// Signed bearer token naming an account.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wraps an encoded token.
    #[must_use]
    pub const fn new(value: String) -> Self {
        Self(value)
    }

    /// Returns the encoded token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the encoded token.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

/// Errors raised by session token implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The token is malformed, forged or expired.
    #[error("invalid or expired session token")]
    Invalid,

    /// A token could not be produced.
    #[error("failed to issue session token: {0}")]
    Issue(String),
}

/// What a session token asserts once its signature has been checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionClaims {
    /// Account the session belongs to.
    pub account: AccountId,
    /// The account's session epoch when the token was issued. Tokens from
    /// an older epoch have been revoked.
    pub epoch: i64,
}

/// Issues and verifies session tokens.
///
/// Times are seconds since the Unix epoch and always come from the caller,
/// so expiry follows the caller's clock.
pub trait SessionTokens: Send + Sync {
    /// Issues a token carrying `claims`, valid for `lifetime` from
    /// `issued_at`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Issue`] when signing fails.
    fn issue(
        &self,
        claims: SessionClaims,
        issued_at: i64,
        lifetime: Duration,
    ) -> Result<SessionToken, SessionError>;

    /// Returns the claims of a token that is genuine and unexpired at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Invalid`] when the token cannot be trusted or
    /// has expired.
    fn verify(&self, token: &str, now: i64) -> Result<SessionClaims, SessionError>;
}
