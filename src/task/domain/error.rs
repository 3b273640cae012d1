//! Error types for task domain validation and parsing.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The priority value is not one of `standard`, `important`, `urgent`.
    #[error("unknown priority '{0}', expected standard, important or urgent")]
    InvalidPriority(String),

    /// The category value is not one of `work`, `personal`, `study`, `sport`.
    #[error("unknown category '{0}', expected work, personal, study or sport")]
    InvalidCategory(String),

    /// The status value is not one of `pending`, `completed`, `deleted`.
    #[error("unknown task status '{0}', expected pending, completed or deleted")]
    InvalidStatus(String),

    /// The status filter is not `all` or a known status.
    #[error("unknown status filter '{0}', expected all, pending, completed or deleted")]
    InvalidStatusFilter(String),

    /// The due date is not a `YYYY-MM-DD` calendar date.
    #[error("invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDueDate(String),

    /// The task identifier is not a UUID.
    #[error("invalid task identifier '{0}'")]
    InvalidTaskId(String),

    /// The requested status change is not permitted by the lifecycle.
    #[error("task {task_id} cannot move from {from} to {to}")]
    InvalidStatusTransition {
        /// Task whose status change was rejected.
        task_id: TaskId,
        /// Status held before the rejected change.
        from: TaskStatus,
        /// Requested status.
        to: TaskStatus,
    },
}
