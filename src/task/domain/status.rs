//! Task lifecycle status and its transition rules.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
///
/// ```text
/// pending <──toggle──> completed
///    │  ^                  │
///    v  │ restore          v
///   deleted <──────────────┘
/// ```
///
/// Hard deletion is not a status: purged tasks leave the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task is open.
    #[default]
    Pending,
    /// Task has been done.
    Completed,
    /// Task sits in the trash awaiting restore or purge.
    Deleted,
}

impl TaskStatus {
    /// Every status, in declaration order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Completed, Self::Deleted];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Deleted => "deleted",
        }
    }

    /// Returns `true` when the lifecycle permits moving from `self` to
    /// `target`.
    ///
    /// Self-transitions return `false`; callers treat them as no-ops.
    /// Restoring from the trash only ever lands on [`Self::Pending`].
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Completed | Self::Deleted)
                | (Self::Completed, Self::Pending | Self::Deleted)
                | (Self::Deleted, Self::Pending)
        )
    }

    /// Returns `true` for the soft-deleted status.
    #[must_use]
    pub const fn is_trashed(self) -> bool {
        matches!(self, Self::Deleted)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "deleted" => Ok(Self::Deleted),
            _ => Err(TaskDomainError::InvalidStatus(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
