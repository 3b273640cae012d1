//! Service layer for task creation, listing, status changes and purging.

use crate::account::domain::AccountId;
use crate::error::ErrorKind;
use crate::task::{
    domain::{
        Category, Priority, Task, TaskDetails, TaskDomainError, TaskFilter, TaskId, TaskStatus,
        TaskSummary, TaskTitle, normalize_description, parse_due_date,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Raw editable task fields, as supplied by a client.
///
/// Used for both creation and full edits. Omitted priority and category fall
/// back to their defaults; supplied values must be recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFieldsRequest {
    title: String,
    description: Option<String>,
    due_date: Option<String>,
    priority: Option<String>,
    category: Option<String>,
}

impl TaskFieldsRequest {
    /// Creates a request with only the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
            priority: None,
            category: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date (`YYYY-MM-DD`; blank means none).
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Sets the priority keyword.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the category keyword.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    fn into_details(self) -> Result<TaskDetails, TaskDomainError> {
        let Self {
            title,
            description,
            due_date,
            priority,
            category,
        } = self;

        let mut details = TaskDetails::new(TaskTitle::new(title)?);
        details.description = normalize_description(description);
        details.due_date = parse_due_date(due_date.as_deref())?;
        if let Some(value) = priority {
            details.priority = Priority::try_from(value.as_str())?;
        }
        if let Some(value) = category {
            details.category = Category::try_from(value.as_str())?;
        }
        Ok(details)
    }
}

/// Request payload for a filtered listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTasksRequest {
    status: String,
    category: String,
    priority: String,
}

impl ListTasksRequest {
    /// Creates a request from the three filter keywords.
    #[must_use]
    pub fn new(
        status: impl Into<String>,
        category: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            status: status.into(),
            category: category.into(),
            priority: priority.into(),
        }
    }

    /// Sets the status keyword.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the category keyword.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the priority keyword.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }
}

impl Default for ListTasksRequest {
    fn default() -> Self {
        Self::new("all", "all", "all")
    }
}

/// Request payload for a status-only change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetTaskStatusRequest {
    task_id: TaskId,
    status: String,
}

impl SetTaskStatusRequest {
    /// Creates a status change request.
    #[must_use]
    pub fn new(task_id: TaskId, status: impl Into<String>) -> Self {
        Self {
            task_id,
            status: status.into(),
        }
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskLifecycleError {
    /// Classifies the error for callers that only need the taxonomy.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_) => ErrorKind::Validation,
            Self::Repository(TaskRepositoryError::NotFound(_)) => ErrorKind::NotFound,
            Self::Repository(_) => ErrorKind::Storage,
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Every operation takes the owning account explicitly; the service holds no
/// per-request state.
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskLifecycleService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a pending task for `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when a field is invalid or
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn create(
        &self,
        owner: AccountId,
        request: TaskFieldsRequest,
    ) -> TaskLifecycleResult<Task> {
        let details = request.into_details()?;
        let task = Task::new(owner, details, &*self.clock);
        self.repository.store(&task).await?;
        info!(task_id = %task.id(), %owner, "task created");
        Ok(task)
    }

    /// Lists the owner's tasks matching the request filters, in listing
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] for an unknown filter keyword
    /// or [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn list(
        &self,
        owner: AccountId,
        request: ListTasksRequest,
    ) -> TaskLifecycleResult<Vec<Task>> {
        let filter = TaskFilter::parse(&request.status, &request.category, &request.priority)?;
        let tasks = self.repository.list(owner, &filter).await?;
        debug!(%owner, count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    /// Lists every task of the owner, trashed ones included.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn list_all(&self, owner: AccountId) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list_all(owner).await?)
    }

    /// Finds one of the owner's tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task is absent or
    /// owned by another account.
    pub async fn find(&self, owner: AccountId, task_id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(owner, task_id)
            .await?
            .ok_or(TaskLifecycleError::Repository(TaskRepositoryError::NotFound(
                task_id,
            )))
    }

    /// Changes only the status of a task.
    ///
    /// Setting the status a task already holds succeeds without writing.
    /// Restoring from the trash always yields `pending`. A trashed task
    /// cannot be completed directly: it has to be restored first, and the
    /// attempt fails as a validation error rather than a missing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] for an unknown status or a
    /// forbidden transition (`deleted` to `completed`), and a repository
    /// `NotFound` when the task is absent or owned by another account.
    pub async fn set_status(
        &self,
        owner: AccountId,
        request: SetTaskStatusRequest,
    ) -> TaskLifecycleResult<Task> {
        let SetTaskStatusRequest { task_id, status } = request;
        let target = TaskStatus::try_from(status.as_str())?;
        let mut task = self.find(owner, task_id).await?;
        let previous = task.status();

        if task.set_status(target)? {
            self.repository.update_status(owner, task_id, target).await?;
            info!(%task_id, %owner, from = %previous, to = %target, "task status changed");
        }
        Ok(task)
    }

    /// Replaces the editable fields of a task. Status is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when a field is invalid and a
    /// repository `NotFound` when the task is absent or owned by another
    /// account.
    pub async fn update(
        &self,
        owner: AccountId,
        task_id: TaskId,
        request: TaskFieldsRequest,
    ) -> TaskLifecycleResult<Task> {
        let details = request.into_details()?;
        let mut task = self.find(owner, task_id).await?;
        task.edit(details);
        self.repository.update_details(&task).await?;
        info!(%task_id, %owner, "task updated");
        Ok(task)
    }

    /// Permanently removes a task whatever its status.
    ///
    /// # Errors
    ///
    /// Returns a repository `NotFound` when the task is absent (including
    /// already purged) or owned by another account.
    pub async fn hard_delete(&self, owner: AccountId, task_id: TaskId) -> TaskLifecycleResult<()> {
        self.repository.delete(owner, task_id).await?;
        info!(%task_id, %owner, "task purged");
        Ok(())
    }

    /// Permanently removes every trashed task of the owner.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] only when storage fails.
    pub async fn empty_trash(&self, owner: AccountId) -> TaskLifecycleResult<u64> {
        let purged = self.repository.purge_trashed(owner).await?;
        info!(%owner, purged, "trash emptied");
        Ok(purged)
    }

    /// Counts the owner's non-trashed tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn summary(&self, owner: AccountId) -> TaskLifecycleResult<TaskSummary> {
        let tasks = self.repository.list_all(owner).await?;
        Ok(TaskSummary::from_tasks(&tasks))
    }
}
