//! Shared fixtures for SQLite integration tests.

use std::sync::Arc;

use crate::test_helpers::{FAST_HASH_ITERATIONS, SteppingClock, TEST_SECRET};
use rstest::fixture;
use tacheo::account::{
    adapters::{jwt::JwtSessionTokens, sqlite::SqliteAccountRepository},
    domain::AccountId,
    services::{AccountService, RegisterAccountRequest},
};
use tacheo::storage::{self, SqlitePool};
use tacheo::task::{adapters::sqlite::SqliteTaskRepository, services::TaskLifecycleService};
use tempfile::TempDir;

/// Task service over SQLite.
pub type TaskService = TaskLifecycleService<SqliteTaskRepository, SteppingClock>;

/// Account service over SQLite.
pub type Accounts = AccountService<SqliteAccountRepository, SteppingClock>;

/// Services sharing one temporary database. The directory is removed on
/// drop.
pub struct SqliteServices {
    pub tasks: TaskService,
    pub accounts: Accounts,
    pub task_repository: SqliteTaskRepository,
    pub pool: SqlitePool,
    _dir: TempDir,
}

impl SqliteServices {
    /// Registers an account and returns its identifier.
    pub async fn register(&self, username: &str) -> AccountId {
        self.accounts
            .register(RegisterAccountRequest::new(username, "password"))
            .await
            .expect("registration should succeed")
            .id()
    }
}

/// Provides services over a fresh database file.
#[fixture]
pub fn db() -> SqliteServices {
    let dir = tempfile::tempdir().expect("temporary directory");
    let path = dir.path().join("tacheo.db");
    let url = path.to_str().expect("utf-8 temp path");
    let pool = storage::connect(url, 4).expect("database pool");
    storage::apply_schema(&pool).expect("schema");

    let clock = Arc::new(SteppingClock::new());
    let task_repository = SqliteTaskRepository::new(pool.clone());
    let tasks = TaskLifecycleService::new(Arc::new(task_repository.clone()), Arc::clone(&clock));
    let accounts = AccountService::new(
        Arc::new(SqliteAccountRepository::new(pool.clone())),
        Arc::new(JwtSessionTokens::new(TEST_SECRET)),
        clock,
    )
    .with_hash_iterations(FAST_HASH_ITERATIONS);

    SqliteServices {
        tasks,
        accounts,
        task_repository,
        pool,
        _dir: dir,
    }
}
