//! Shared handler state.

use crate::account::{
    adapters::{
        jwt::JwtSessionTokens, memory::InMemoryAccountRepository, sqlite::SqliteAccountRepository,
    },
    ports::AccountRepository,
    services::AccountService,
};
use crate::storage::SqlitePool;
use crate::task::{
    adapters::{memory::InMemoryTaskRepository, sqlite::SqliteTaskRepository},
    ports::TaskRepository,
    services::TaskLifecycleService,
};
use mockable::DefaultClock;
use std::sync::Arc;

/// Task service as seen by handlers.
pub type SharedTaskService = TaskLifecycleService<dyn TaskRepository, DefaultClock>;

/// Account service as seen by handlers.
pub type SharedAccountService = AccountService<dyn AccountRepository, DefaultClock>;

/// Services shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Task lifecycle service.
    pub tasks: SharedTaskService,
    /// Account service.
    pub accounts: SharedAccountService,
}

impl AppState {
    /// Bundles already-built services.
    #[must_use]
    pub const fn new(tasks: SharedTaskService, accounts: SharedAccountService) -> Self {
        Self { tasks, accounts }
    }

    /// Wires both services to SQLite storage and JWT sessions.
    #[must_use]
    pub fn sqlite(pool: &SqlitePool, secret: &str, hash_iterations: u32) -> Self {
        let task_repository: Arc<dyn TaskRepository> =
            Arc::new(SqliteTaskRepository::new(pool.clone()));
        let account_repository: Arc<dyn AccountRepository> =
            Arc::new(SqliteAccountRepository::new(pool.clone()));
        Self::wire(task_repository, account_repository, secret, hash_iterations)
    }

    /// Wires both services to in-memory storage and JWT sessions.
    #[must_use]
    pub fn in_memory(secret: &str, hash_iterations: u32) -> Self {
        let task_store = InMemoryTaskRepository::new();
        let account_repository: Arc<dyn AccountRepository> =
            Arc::new(InMemoryAccountRepository::with_task_store(task_store.clone()));
        let task_repository: Arc<dyn TaskRepository> = Arc::new(task_store);
        Self::wire(task_repository, account_repository, secret, hash_iterations)
    }

    fn wire(
        task_repository: Arc<dyn TaskRepository>,
        account_repository: Arc<dyn AccountRepository>,
        secret: &str,
        hash_iterations: u32,
    ) -> Self {
        let clock = Arc::new(DefaultClock);
        let tasks = TaskLifecycleService::new(task_repository, Arc::clone(&clock));
        let accounts = AccountService::new(
            account_repository,
            Arc::new(JwtSessionTokens::new(secret)),
            clock,
        )
        .with_hash_iterations(hash_iterations);
        Self { tasks, accounts }
    }
}
