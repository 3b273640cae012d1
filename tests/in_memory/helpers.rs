//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use crate::test_helpers::{FAST_HASH_ITERATIONS, SteppingClock, TEST_SECRET};
use rstest::fixture;
use tacheo::account::{
    adapters::{jwt::JwtSessionTokens, memory::InMemoryAccountRepository},
    domain::AccountId,
    services::{AccountService, RegisterAccountRequest},
};
use tacheo::task::{adapters::memory::InMemoryTaskRepository, services::TaskLifecycleService};

/// Task service over an in-memory store.
pub type TaskService = TaskLifecycleService<InMemoryTaskRepository, SteppingClock>;

/// Account service sharing the task store for cascading deletion.
pub type Accounts = AccountService<InMemoryAccountRepository, SteppingClock>;

/// Both services wired to the same in-memory stores.
pub struct Services {
    pub tasks: TaskService,
    pub accounts: Accounts,
    pub clock: Arc<SteppingClock>,
}

impl Services {
    /// Registers an account and returns its identifier.
    pub async fn register(&self, username: &str) -> AccountId {
        self.accounts
            .register(RegisterAccountRequest::new(username, "password"))
            .await
            .expect("registration should succeed")
            .id()
    }
}

/// Provides fresh services for each test.
#[fixture]
pub fn services() -> Services {
    let clock = Arc::new(SteppingClock::new());
    let task_store = InMemoryTaskRepository::new();
    let accounts = AccountService::new(
        Arc::new(InMemoryAccountRepository::with_task_store(task_store.clone())),
        Arc::new(JwtSessionTokens::new(TEST_SECRET)),
        Arc::clone(&clock),
    )
    .with_hash_iterations(FAST_HASH_ITERATIONS);
    let tasks = TaskLifecycleService::new(Arc::new(task_store), Arc::clone(&clock));
    Services {
        tasks,
        accounts,
        clock,
    }
}
