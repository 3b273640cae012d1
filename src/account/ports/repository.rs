//! Repository port for account persistence.

use crate::account::domain::{Account, AccountId, Username};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for account repository operations.
pub type AccountRepositoryResult<T> = Result<T, AccountRepositoryError>;

/// Account persistence contract.
///
/// Deleting an account must also remove every task it owns.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Stores a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AccountRepositoryError::DuplicateUsername`] when the
    /// username is taken.
    async fn store(&self, account: &Account) -> AccountRepositoryResult<()>;

    /// Persists the username, password digest and photo reference of an
    /// existing account.
    ///
    /// # Errors
    ///
    /// Returns [`AccountRepositoryError::NotFound`] when the account does not
    /// exist and [`AccountRepositoryError::DuplicateUsername`] when the new
    /// username belongs to another account.
    async fn update(&self, account: &Account) -> AccountRepositoryResult<()>;

    /// Finds an account by identifier.
    async fn find_by_id(&self, id: AccountId) -> AccountRepositoryResult<Option<Account>>;

    /// Finds an account by its exact username.
    async fn find_by_username(&self, username: &Username)
    -> AccountRepositoryResult<Option<Account>>;

    /// Deletes an account and all of its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`AccountRepositoryError::NotFound`] when the account does not
    /// exist.
    async fn delete(&self, id: AccountId) -> AccountRepositoryResult<()>;
}

/// Errors returned by account repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AccountRepositoryError {
    /// Another account already uses this username.
    #[error("username '{0}' is already taken")]
    DuplicateUsername(Username),

    /// The account does not exist.
    #[error("account not found: {0}")]
    NotFound(AccountId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AccountRepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
