//! In-memory task repository for tests and embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::account::domain::AccountId;
use crate::task::{
    domain::{Task, TaskFilter, TaskId, TaskStatus, sort_for_listing},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Clones share the same underlying state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every task owned by `owner` and returns how many were removed.
    ///
    /// Mirrors the `ON DELETE CASCADE` ownership constraint of the SQL
    /// schema for in-memory account stores.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn remove_owner(&self, owner: AccountId) -> TaskRepositoryResult<u64> {
        let mut tasks = self.write()?;
        let before = tasks.len();
        tasks.retain(|_, task| task.owner() != owner);
        Ok(count(before - tasks.len()))
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, HashMap<TaskId, Task>>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, HashMap<TaskId, Task>>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

/// Looks up a task only if `owner` owns it.
fn owned_mut(
    tasks: &mut HashMap<TaskId, Task>,
    owner: AccountId,
    id: TaskId,
) -> TaskRepositoryResult<&mut Task> {
    tasks
        .get_mut(&id)
        .filter(|task| task.owner() == owner)
        .ok_or(TaskRepositoryError::NotFound(id))
}

fn collect_sorted<'a>(tasks: impl Iterator<Item = &'a Task>) -> Vec<Task> {
    let mut selected: Vec<Task> = tasks.cloned().collect();
    sort_for_listing(&mut selected);
    selected
}

fn count(removed: usize) -> u64 {
    u64::try_from(removed).unwrap_or(u64::MAX)
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.write()?;
        if tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update_details(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.write()?;
        let stored = owned_mut(&mut tasks, task.owner(), task.id())?;
        stored.edit(task.details().clone());
        Ok(())
    }

    async fn update_status(
        &self,
        owner: AccountId,
        id: TaskId,
        status: TaskStatus,
    ) -> TaskRepositoryResult<()> {
        let mut tasks = self.write()?;
        let stored = owned_mut(&mut tasks, owner, id)?;
        // Lifecycle rules are enforced by the service; storage writes blindly
        // like the SQL adapter's conditional UPDATE.
        stored.overwrite_status(status);
        Ok(())
    }

    async fn find_by_id(&self, owner: AccountId, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.read()?;
        Ok(tasks.get(&id).filter(|task| task.owner() == owner).cloned())
    }

    async fn list(&self, owner: AccountId, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.read()?;
        Ok(collect_sorted(
            tasks
                .values()
                .filter(|task| task.owner() == owner && filter.matches(task)),
        ))
    }

    async fn list_all(&self, owner: AccountId) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.read()?;
        Ok(collect_sorted(
            tasks.values().filter(|task| task.owner() == owner),
        ))
    }

    async fn delete(&self, owner: AccountId, id: TaskId) -> TaskRepositoryResult<()> {
        let mut tasks = self.write()?;
        owned_mut(&mut tasks, owner, id)?;
        tasks.remove(&id);
        Ok(())
    }

    async fn purge_trashed(&self, owner: AccountId) -> TaskRepositoryResult<u64> {
        let mut tasks = self.write()?;
        let before = tasks.len();
        tasks.retain(|_, task| task.owner() != owner || !task.status().is_trashed());
        Ok(count(before - tasks.len()))
    }
}
