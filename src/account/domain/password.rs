//! Salted PBKDF2-HMAC-SHA256 password digests.
//!
//! Digests are stored as `pbkdf2:<iterations>:<hex salt>:<hex hash>`.

use super::AccountDomainError;
use rand::RngCore;
use sha2::Sha256;
use std::fmt;

const SCHEME: &str = "pbkdf2";
const SALT_LEN: usize = 16;
const HASH_LEN: usize = 32;

/// Iteration count used when none is configured.
pub const DEFAULT_HASH_ITERATIONS: u32 = 100_000;

/// Encoded password digest. Never printed or serialised.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hashes `password` with a fresh random salt.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::EmptyPassword`] for an empty password.
    pub fn derive(password: &str, iterations: u32) -> Result<Self, AccountDomainError> {
        if password.is_empty() {
            return Err(AccountDomainError::EmptyPassword);
        }
        let rounds = iterations.max(1);
        let mut salt = [0_u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);
        let digest = digest(password, &salt, rounds);
        Ok(Self(format!(
            "{SCHEME}:{rounds}:{}:{}",
            hex::encode(salt),
            hex::encode(digest)
        )))
    }

    /// Wraps a digest read back from storage.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::MalformedPasswordHash`] when the value is
    /// not in the stored format.
    pub fn from_encoded(value: impl Into<String>) -> Result<Self, AccountDomainError> {
        let encoded = value.into();
        parse(&encoded).ok_or(AccountDomainError::MalformedPasswordHash)?;
        Ok(Self(encoded))
    }

    /// Returns `true` when `password` produces this digest.
    #[must_use]
    pub fn verify(&self, password: &str) -> bool {
        let Some((rounds, salt, expected)) = parse(&self.0) else {
            return false;
        };
        constant_time_eq(&digest(password, &salt, rounds), &expected)
    }

    /// Returns the encoded digest for storage.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

fn digest(password: &str, salt: &[u8], rounds: u32) -> [u8; HASH_LEN] {
    let mut out = [0_u8; HASH_LEN];
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, rounds, &mut out);
    out
}

fn parse(encoded: &str) -> Option<(u32, Vec<u8>, Vec<u8>)> {
    let mut parts = encoded.split(':');
    let scheme = parts.next()?;
    let rounds = parts.next()?.parse::<u32>().ok()?;
    let salt = hex::decode(parts.next()?).ok()?;
    let hash = hex::decode(parts.next()?).ok()?;
    if scheme != SCHEME || rounds == 0 || parts.next().is_some() || hash.len() != HASH_LEN {
        return None;
    }
    Some((rounds, salt, hash))
}

fn constant_time_eq(left: &[u8], right: &[u8]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    left.iter()
        .zip(right)
        .fold(0_u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}
