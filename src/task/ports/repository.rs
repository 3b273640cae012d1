//! Repository port for owner-scoped task persistence.

use crate::account::domain::AccountId;
use crate::task::domain::{Task, TaskFilter, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every lookup and write is keyed by both the task identifier and the
/// owning account. A task owned by another account is indistinguishable
/// from a missing one.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists the editable fields of an existing task. The stored status is
    /// not written.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task with this ID is
    /// owned by the task's owner.
    async fn update_details(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Sets the status of a single task in one conditional write.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task with this ID is
    /// owned by `owner`.
    async fn update_status(
        &self,
        owner: AccountId,
        id: TaskId,
        status: TaskStatus,
    ) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier within the owner's tasks.
    ///
    /// Returns `None` when the task does not exist or belongs to another
    /// account.
    async fn find_by_id(&self, owner: AccountId, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns the owner's tasks matching `filter`, in listing order.
    async fn list(&self, owner: AccountId, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns every task of the owner, trashed ones included, in listing
    /// order.
    async fn list_all(&self, owner: AccountId) -> TaskRepositoryResult<Vec<Task>>;

    /// Purges a single task regardless of its status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task with this ID is
    /// owned by `owner`.
    async fn delete(&self, owner: AccountId, id: TaskId) -> TaskRepositoryResult<()>;

    /// Purges every trashed task of the owner and returns how many were
    /// removed.
    async fn purge_trashed(&self, owner: AccountId) -> TaskRepositoryResult<u64>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found for the requesting owner.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
