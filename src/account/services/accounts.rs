//! Service layer for registration, sessions and profile changes.

use crate::account::{
    domain::{
        Account, AccountDomainError, AccountId, DEFAULT_HASH_ITERATIONS, PasswordHash,
        ProfilePhoto, Username,
    },
    ports::{
        AccountRepository, AccountRepositoryError, SessionClaims, SessionError, SessionToken,
        SessionTokens,
    },
};
use crate::error::ErrorKind;
use chrono::Duration;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{debug, info, warn};

/// Session lifetime without "remember me".
pub const STANDARD_SESSION_DAYS: i64 = 1;

/// Session lifetime with "remember me".
pub const REMEMBERED_SESSION_DAYS: i64 = 30;

/// Request payload for registering an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterAccountRequest {
    username: String,
    password: String,
}

impl RegisterAccountRequest {
    /// Creates a registration request.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Request payload for opening a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    username: String,
    password: String,
    remember: bool,
}

impl LoginRequest {
    /// Creates a login request for a standard-length session.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            remember: false,
        }
    }

    /// Requests a long-lived session.
    #[must_use]
    pub const fn with_remember(mut self, remember: bool) -> Self {
        self.remember = remember;
        self
    }
}

/// Request payload for a password change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangePasswordRequest {
    old_password: String,
    new_password: String,
    confirm_password: String,
}

impl ChangePasswordRequest {
    /// Creates a password change request.
    #[must_use]
    pub fn new(
        old_password: impl Into<String>,
        new_password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            old_password: old_password.into(),
            new_password: new_password.into(),
            confirm_password: confirm_password.into(),
        }
    }
}

/// An account together with a freshly issued session token.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    /// The authenticated account.
    pub account: Account,
    /// Bearer token for subsequent requests.
    pub token: SessionToken,
}

/// Outcome of storing a new profile photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoChange {
    /// Reference under which the caller must store the processed image.
    pub current: ProfilePhoto,
    /// Reference that was replaced; its file may now be removed.
    pub previous: Option<ProfilePhoto>,
}

/// Service-level errors for account operations.
#[derive(Debug, Error)]
pub enum AccountServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] AccountDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] AccountRepositoryError),

    /// Username or password did not match.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// The session token is missing, invalid or names a deleted account.
    #[error("authentication required")]
    Unauthenticated,

    /// Session token handling failed.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The password hashing worker did not complete.
    #[error("password hashing task failed: {0}")]
    Hashing(#[source] JoinError),
}

impl AccountServiceError {
    /// Classifies the error for callers that only need the taxonomy.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_)
            | Self::InvalidCredentials
            | Self::Repository(AccountRepositoryError::DuplicateUsername(_)) => {
                ErrorKind::Validation
            }
            Self::Repository(AccountRepositoryError::NotFound(_)) => ErrorKind::NotFound,
            Self::Unauthenticated | Self::Session(SessionError::Invalid) => {
                ErrorKind::Unauthenticated
            }
            Self::Repository(_) | Self::Session(SessionError::Issue(_)) | Self::Hashing(_) => {
                ErrorKind::Storage
            }
        }
    }
}

/// Result type for account service operations.
pub type AccountServiceResult<T> = Result<T, AccountServiceError>;

/// Account orchestration service.
pub struct AccountService<A, C>
where
    A: AccountRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<A>,
    sessions: Arc<dyn SessionTokens>,
    clock: Arc<C>,
    hash_iterations: u32,
}

impl<A, C> Clone for AccountService<A, C>
where
    A: AccountRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            sessions: Arc::clone(&self.sessions),
            clock: Arc::clone(&self.clock),
            hash_iterations: self.hash_iterations,
        }
    }
}

impl<A, C> AccountService<A, C>
where
    A: AccountRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new account service hashing with
    /// [`DEFAULT_HASH_ITERATIONS`].
    #[must_use]
    pub fn new(repository: Arc<A>, sessions: Arc<dyn SessionTokens>, clock: Arc<C>) -> Self {
        Self {
            repository,
            sessions,
            clock,
            hash_iterations: DEFAULT_HASH_ITERATIONS,
        }
    }

    /// Overrides the PBKDF2 iteration count for new digests.
    #[must_use]
    pub fn with_hash_iterations(mut self, iterations: u32) -> Self {
        self.hash_iterations = iterations.max(1);
        self
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError::Domain`] when the username or password
    /// is empty and a repository `DuplicateUsername` when the name is taken.
    pub async fn register(&self, request: RegisterAccountRequest) -> AccountServiceResult<Account> {
        let RegisterAccountRequest { username, password } = request;
        let name = Username::new(username)?;
        let digest = self.hash_password(password).await?;
        let account = Account::new(name, digest, &*self.clock);
        self.repository.store(&account).await?;
        info!(account = %account.id(), username = %account.username(), "account registered");
        Ok(account)
    }

    /// Checks credentials and issues a session token.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError::InvalidCredentials`] for an unknown
    /// username or a wrong password.
    pub async fn login(&self, request: LoginRequest) -> AccountServiceResult<AuthenticatedSession> {
        let LoginRequest {
            username,
            password,
            remember,
        } = request;
        let name = Username::new(username)?;
        if password.is_empty() {
            return Err(AccountDomainError::EmptyPassword.into());
        }

        let Some(account) = self.repository.find_by_username(&name).await? else {
            warn!(username = %name, "login for unknown username");
            return Err(AccountServiceError::InvalidCredentials);
        };
        if !check_password(&account, password).await? {
            warn!(account = %account.id(), "login with wrong password");
            return Err(AccountServiceError::InvalidCredentials);
        }

        let token = self.open_session(&account, remember)?;
        info!(account = %account.id(), remember, "session opened");
        Ok(AuthenticatedSession { account, token })
    }

    /// Issues a session token for an account that has just been
    /// authenticated by other means, such as registration.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError::Session`] when signing fails.
    pub fn open_session(
        &self,
        account: &Account,
        remember: bool,
    ) -> AccountServiceResult<SessionToken> {
        let days = if remember {
            REMEMBERED_SESSION_DAYS
        } else {
            STANDARD_SESSION_DAYS
        };
        let claims = SessionClaims {
            account: account.id(),
            epoch: account.session_epoch(),
        };
        let issued_at = self.clock.utc().timestamp();
        Ok(self.sessions.issue(claims, issued_at, Duration::days(days))?)
    }

    /// Resolves the account named by a session token.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError::Unauthenticated`] when the token is
    /// invalid, expired or revoked by a logout, or its account no longer
    /// exists.
    pub async fn current_account_id(&self, token: &str) -> AccountServiceResult<AccountId> {
        let now = self.clock.utc().timestamp();
        let Ok(claims) = self.sessions.verify(token, now) else {
            warn!("rejected invalid session token");
            return Err(AccountServiceError::Unauthenticated);
        };
        let Some(account) = self.repository.find_by_id(claims.account).await? else {
            warn!(account = %claims.account, "session names a deleted account");
            return Err(AccountServiceError::Unauthenticated);
        };
        if account.session_epoch() != claims.epoch {
            warn!(account = %claims.account, "session was revoked");
            return Err(AccountServiceError::Unauthenticated);
        }
        Ok(account.id())
    }

    /// Ends every open session of the account. Tokens issued before the
    /// call are refused from then on.
    ///
    /// # Errors
    ///
    /// Returns a repository `NotFound` when the account does not exist.
    pub async fn logout(&self, id: AccountId) -> AccountServiceResult<()> {
        let mut account = self.profile(id).await?;
        account.revoke_sessions();
        self.repository.update(&account).await?;
        info!(account = %id, epoch = account.session_epoch(), "sessions revoked");
        Ok(())
    }

    /// Returns `true` when the account exists.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError::Repository`] when the lookup fails.
    pub async fn account_exists(&self, id: AccountId) -> AccountServiceResult<bool> {
        Ok(self.repository.find_by_id(id).await?.is_some())
    }

    /// Returns the account.
    ///
    /// # Errors
    ///
    /// Returns a repository `NotFound` when the account does not exist.
    pub async fn profile(&self, id: AccountId) -> AccountServiceResult<Account> {
        debug!(account = %id, "loading profile");
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AccountServiceError::Repository(
                AccountRepositoryError::NotFound(id),
            ))
    }

    /// Changes the login name. Renaming to the current name is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError::Domain`] for an empty name and a
    /// repository `DuplicateUsername` when another account uses it.
    pub async fn rename(
        &self,
        id: AccountId,
        new_username: impl Into<String> + Send,
    ) -> AccountServiceResult<Account> {
        let name = Username::new(new_username)?;
        let mut account = self.profile(id).await?;
        if account.rename(name) {
            self.repository.update(&account).await?;
            info!(account = %id, username = %account.username(), "account renamed");
        }
        Ok(account)
    }

    /// Replaces the password after checking the current one.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::EmptyPassword`] when a field is empty,
    /// [`AccountDomainError::PasswordMismatch`] when the confirmation
    /// differs and [`AccountServiceError::InvalidCredentials`] when the old
    /// password is wrong.
    pub async fn change_password(
        &self,
        id: AccountId,
        request: ChangePasswordRequest,
    ) -> AccountServiceResult<()> {
        let ChangePasswordRequest {
            old_password,
            new_password,
            confirm_password,
        } = request;
        if old_password.is_empty() || new_password.is_empty() || confirm_password.is_empty() {
            return Err(AccountDomainError::EmptyPassword.into());
        }
        if new_password != confirm_password {
            return Err(AccountDomainError::PasswordMismatch.into());
        }

        let mut account = self.profile(id).await?;
        if !check_password(&account, old_password).await? {
            warn!(account = %id, "password change with wrong current password");
            return Err(AccountServiceError::InvalidCredentials);
        }
        account.set_password_hash(self.hash_password(new_password).await?);
        self.repository.update(&account).await?;
        info!(account = %id, "password changed");
        Ok(())
    }

    /// Deletes the account and all of its tasks after checking the password.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError::InvalidCredentials`] when the password
    /// is wrong and a repository `NotFound` when the account does not exist.
    pub async fn delete_account(
        &self,
        id: AccountId,
        password: impl Into<String> + Send,
    ) -> AccountServiceResult<()> {
        let account = self.profile(id).await?;
        if !check_password(&account, password.into()).await? {
            warn!(account = %id, "account deletion with wrong password");
            return Err(AccountServiceError::InvalidCredentials);
        }
        self.repository.delete(id).await?;
        info!(account = %id, "account deleted");
        Ok(())
    }

    /// Allocates and stores a new profile photo reference for an upload
    /// named `file_name`.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::UnsupportedPhotoType`] for a file
    /// without an accepted image extension.
    pub async fn set_profile_photo(
        &self,
        id: AccountId,
        file_name: &str,
    ) -> AccountServiceResult<PhotoChange> {
        let photo = ProfilePhoto::allocate(id, file_name, self.clock.utc())?;
        let mut account = self.profile(id).await?;
        let previous = account.replace_profile_photo(photo.clone());
        self.repository.update(&account).await?;
        info!(account = %id, photo = %photo, "profile photo replaced");
        Ok(PhotoChange {
            current: photo,
            previous,
        })
    }

    /// Removes the profile photo reference and returns it.
    ///
    /// # Errors
    ///
    /// Returns a repository `NotFound` when the account does not exist.
    pub async fn clear_profile_photo(
        &self,
        id: AccountId,
    ) -> AccountServiceResult<Option<ProfilePhoto>> {
        let mut account = self.profile(id).await?;
        let previous = account.clear_profile_photo();
        if previous.is_some() {
            self.repository.update(&account).await?;
            info!(account = %id, "profile photo removed");
        }
        Ok(previous)
    }

    async fn hash_password(&self, password: String) -> AccountServiceResult<PasswordHash> {
        let iterations = self.hash_iterations;
        let digest = tokio::task::spawn_blocking(move || {
            PasswordHash::derive(&password, iterations)
        })
        .await
        .map_err(AccountServiceError::Hashing)??;
        Ok(digest)
    }
}

async fn check_password(account: &Account, password: String) -> AccountServiceResult<bool> {
    let digest = account.password_hash().clone();
    tokio::task::spawn_blocking(move || digest.verify(&password))
        .await
        .map_err(AccountServiceError::Hashing)
}
