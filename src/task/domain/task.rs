//! Task aggregate root and its editable details.

use super::{Category, Priority, TaskDomainError, TaskId, TaskStatus, TaskTitle};
use crate::account::domain::AccountId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// User-editable task fields.
///
/// Creation and full edits both go through this type, so the same
/// validation applies to each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDetails {
    /// Task title.
    pub title: TaskTitle,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Optional due date without a time component.
    pub due_date: Option<NaiveDate>,
    /// Task priority.
    pub priority: Priority,
    /// Task category.
    pub category: Category,
}

impl TaskDetails {
    /// Creates details with default priority and category and no optional
    /// fields.
    #[must_use]
    pub fn new(title: TaskTitle) -> Self {
        Self {
            title,
            description: None,
            due_date: None,
            priority: Priority::default(),
            category: Category::default(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the category.
    #[must_use]
    pub const fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    owner: AccountId,
    #[serde(flatten)]
    details: TaskDetails,
    status: TaskStatus,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Owning account.
    pub owner: AccountId,
    /// Persisted editable fields.
    pub details: TaskDetails,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new pending task owned by `owner`.
    #[must_use]
    pub fn new(owner: AccountId, details: TaskDetails, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            owner,
            details,
            status: TaskStatus::Pending,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner: data.owner,
            details: data.details,
            status: data.status,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning account.
    #[must_use]
    pub const fn owner(&self) -> AccountId {
        self.owner
    }

    /// Returns the editable fields.
    #[must_use]
    pub const fn details(&self) -> &TaskDetails {
        &self.details
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.details.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.details.description.as_deref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.details.due_date
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.details.priority
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.details.category
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Moves the task to `target`.
    ///
    /// Returns `Ok(false)` without touching the task when it already holds
    /// `target`, so repeated calls are idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] when the
    /// lifecycle forbids the move (for example `deleted` to `completed`).
    pub fn set_status(&mut self, target: TaskStatus) -> Result<bool, TaskDomainError> {
        if self.status == target {
            return Ok(false);
        }
        if !self.status.can_transition_to(target) {
            return Err(TaskDomainError::InvalidStatusTransition {
                task_id: self.id,
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        Ok(true)
    }

    /// Overwrites the status without lifecycle checks, mirroring a write
    /// already accepted by storage.
    pub(crate) fn overwrite_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Replaces every editable field. Status is left untouched.
    pub fn edit(&mut self, details: TaskDetails) {
        self.details = details;
    }
}
