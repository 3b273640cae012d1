//! Account aggregate.

use super::{AccountId, PasswordHash, ProfilePhoto, Username};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;

/// A registered user. Every task is owned by exactly one account.
///
/// The password digest is never serialised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    id: AccountId,
    username: Username,
    #[serde(skip)]
    password_hash: PasswordHash,
    profile_photo: Option<ProfilePhoto>,
    #[serde(skip)]
    session_epoch: i64,
    created_at: DateTime<Utc>,
}

/// Data required to reconstruct a persisted account.
#[derive(Debug, Clone)]
pub struct PersistedAccountData {
    /// Account identifier.
    pub id: AccountId,
    /// Login name.
    pub username: Username,
    /// Stored password digest.
    pub password_hash: PasswordHash,
    /// Optional photo reference.
    pub profile_photo: Option<ProfilePhoto>,
    /// Current session epoch.
    pub session_epoch: i64,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new account without a profile photo.
    #[must_use]
    pub fn new(username: Username, password_hash: PasswordHash, clock: &impl Clock) -> Self {
        Self {
            id: AccountId::new(),
            username,
            password_hash,
            profile_photo: None,
            session_epoch: 0,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs an account from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedAccountData) -> Self {
        Self {
            id: data.id,
            username: data.username,
            password_hash: data.password_hash,
            profile_photo: data.profile_photo,
            session_epoch: data.session_epoch,
            created_at: data.created_at,
        }
    }

    /// Returns the account identifier.
    #[must_use]
    pub const fn id(&self) -> AccountId {
        self.id
    }

    /// Returns the login name.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the stored password digest.
    #[must_use]
    pub const fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Returns the profile photo reference, if any.
    #[must_use]
    pub const fn profile_photo(&self) -> Option<&ProfilePhoto> {
        self.profile_photo.as_ref()
    }

    /// Returns the session epoch. Only tokens issued in this epoch are
    /// honoured.
    #[must_use]
    pub const fn session_epoch(&self) -> i64 {
        self.session_epoch
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns `true` when `password` matches the stored digest.
    #[must_use]
    pub fn verify_password(&self, password: &str) -> bool {
        self.password_hash.verify(password)
    }

    /// Replaces the login name. Returns `false` when unchanged.
    pub fn rename(&mut self, username: Username) -> bool {
        if self.username == username {
            return false;
        }
        self.username = username;
        true
    }

    /// Replaces the stored password digest.
    pub fn set_password_hash(&mut self, password_hash: PasswordHash) {
        self.password_hash = password_hash;
    }

    /// Starts a new session epoch, invalidating every token issued before.
    pub const fn revoke_sessions(&mut self) {
        self.session_epoch = self.session_epoch.saturating_add(1);
    }

    /// Stores a new photo reference and returns the one it replaced.
    pub const fn replace_profile_photo(&mut self, photo: ProfilePhoto) -> Option<ProfilePhoto> {
        self.profile_photo.replace(photo)
    }

    /// Removes the photo reference and returns it.
    pub const fn clear_profile_photo(&mut self) -> Option<ProfilePhoto> {
        self.profile_photo.take()
    }
}
