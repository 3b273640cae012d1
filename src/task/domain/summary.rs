//! Dashboard counters over an account's tasks.

use super::{Task, TaskStatus};
use serde::{Deserialize, Serialize};

/// Task counts for a single account. Trashed tasks are never counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    /// Pending plus completed tasks.
    pub total: u64,
    /// Tasks still open.
    pub pending: u64,
    /// Tasks marked done.
    pub completed: u64,
}

impl TaskSummary {
    /// Counts the given tasks.
    #[must_use]
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        tasks
            .into_iter()
            .fold(Self::default(), |mut summary, task| {
                match task.status() {
                    TaskStatus::Pending => summary.pending += 1,
                    TaskStatus::Completed => summary.completed += 1,
                    TaskStatus::Deleted => return summary,
                }
                summary.total += 1;
                summary
            })
    }
}
