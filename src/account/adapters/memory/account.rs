//! In-memory account repository for tests and embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use crate::account::{
    domain::{Account, AccountId, Username},
    ports::{AccountRepository, AccountRepositoryError, AccountRepositoryResult},
};
use crate::task::adapters::memory::InMemoryTaskRepository;

/// Thread-safe in-memory account repository.
///
/// Clones share the same underlying state. When built with
/// [`InMemoryAccountRepository::with_task_store`], deleting an account also
/// removes its tasks from that store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountRepository {
    state: Arc<RwLock<HashMap<AccountId, Account>>>,
    tasks: Option<InMemoryTaskRepository>,
}

impl InMemoryAccountRepository {
    /// Creates an empty repository with no task cascade.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty repository that cascades deletions into `tasks`.
    #[must_use]
    pub fn with_task_store(tasks: InMemoryTaskRepository) -> Self {
        Self {
            state: Arc::default(),
            tasks: Some(tasks),
        }
    }

    fn read(&self) -> AccountRepositoryResult<RwLockReadGuard<'_, HashMap<AccountId, Account>>> {
        self.state.read().map_err(|err| {
            AccountRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> AccountRepositoryResult<RwLockWriteGuard<'_, HashMap<AccountId, Account>>> {
        self.state.write().map_err(|err| {
            AccountRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

fn username_taken(
    accounts: &HashMap<AccountId, Account>,
    username: &Username,
    except: AccountId,
) -> bool {
    accounts
        .values()
        .any(|account| account.id() != except && account.username() == username)
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn store(&self, account: &Account) -> AccountRepositoryResult<()> {
        let mut accounts = self.write()?;
        if username_taken(&accounts, account.username(), account.id()) {
            return Err(AccountRepositoryError::DuplicateUsername(
                account.username().clone(),
            ));
        }
        accounts.insert(account.id(), account.clone());
        Ok(())
    }

    async fn update(&self, account: &Account) -> AccountRepositoryResult<()> {
        let mut accounts = self.write()?;
        if !accounts.contains_key(&account.id()) {
            return Err(AccountRepositoryError::NotFound(account.id()));
        }
        if username_taken(&accounts, account.username(), account.id()) {
            return Err(AccountRepositoryError::DuplicateUsername(
                account.username().clone(),
            ));
        }
        accounts.insert(account.id(), account.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: AccountId) -> AccountRepositoryResult<Option<Account>> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> AccountRepositoryResult<Option<Account>> {
        Ok(self
            .read()?
            .values()
            .find(|account| account.username() == username)
            .cloned())
    }

    async fn delete(&self, id: AccountId) -> AccountRepositoryResult<()> {
        let mut accounts = self.write()?;
        if accounts.remove(&id).is_none() {
            return Err(AccountRepositoryError::NotFound(id));
        }
        if let Some(tasks) = &self.tasks {
            let removed = tasks
                .remove_owner(id)
                .map_err(AccountRepositoryError::persistence)?;
            debug!(account = %id, removed, "cascaded account deletion to tasks");
        }
        Ok(())
    }
}
