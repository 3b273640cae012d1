//! HS256 JSON Web Token session adapter.

use crate::account::{
    domain::AccountId,
    ports::{SessionClaims, SessionError, SessionToken, SessionTokens},
};
use chrono::Duration;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Account identifier.
    sub: String,
    /// Session epoch of the account at issue time.
    epoch: i64,
    /// Issued-at, Unix seconds.
    iat: i64,
    /// Expiry, Unix seconds.
    exp: i64,
}

/// Session tokens signed with a shared secret.
///
/// Expiry is checked against the time passed to [`SessionTokens::verify`],
/// never against the system clock.
#[derive(Clone)]
pub struct JwtSessionTokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtSessionTokens {
    /// Creates a signer and verifier for `secret`.
    #[must_use]
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::default();
        validation.validate_exp = false;
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

impl fmt::Debug for JwtSessionTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtSessionTokens").finish_non_exhaustive()
    }
}

impl SessionTokens for JwtSessionTokens {
    fn issue(
        &self,
        claims: SessionClaims,
        issued_at: i64,
        lifetime: Duration,
    ) -> Result<SessionToken, SessionError> {
        let payload = Claims {
            sub: claims.account.to_string(),
            epoch: claims.epoch,
            iat: issued_at,
            exp: issued_at.saturating_add(lifetime.num_seconds()),
        };
        jsonwebtoken::encode(&Header::default(), &payload, &self.encoding)
            .map(SessionToken::new)
            .map_err(|err| SessionError::Issue(err.to_string()))
    }

    fn verify(&self, token: &str, now: i64) -> Result<SessionClaims, SessionError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|_| SessionError::Invalid)?;
        let Claims { sub, epoch, exp, .. } = data.claims;
        if now >= exp {
            return Err(SessionError::Invalid);
        }
        let account = sub.parse::<AccountId>().map_err(|_| SessionError::Invalid)?;
        Ok(SessionClaims { account, epoch })
    }
}
