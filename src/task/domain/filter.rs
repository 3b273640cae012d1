//! Listing filters and the canonical listing order.

use super::{Category, Priority, Task, TaskDomainError, TaskStatus};
use std::cmp::Ordering;

/// Keyword meaning "no restriction" in every filter position.
const ALL: &str = "all";

/// Status restriction for task listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    /// Every task that is not in the trash.
    #[default]
    Active,
    /// Only tasks holding the given status.
    Only(TaskStatus),
}

impl StatusFilter {
    /// Returns `true` when `status` passes the filter.
    #[must_use]
    pub fn accepts(self, status: TaskStatus) -> bool {
        match self {
            Self::Active => !status.is_trashed(),
            Self::Only(wanted) => status == wanted,
        }
    }

    /// Returns the statuses that pass the filter.
    #[must_use]
    pub fn statuses(self) -> Vec<TaskStatus> {
        TaskStatus::ALL
            .into_iter()
            .filter(|status| self.accepts(*status))
            .collect()
    }
}

impl TryFrom<&str> for StatusFilter {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().eq_ignore_ascii_case(ALL) {
            return Ok(Self::Active);
        }
        TaskStatus::try_from(value)
            .map(Self::Only)
            .map_err(|_| TaskDomainError::InvalidStatusFilter(value.to_owned()))
    }
}

/// Conjunctive filter over status, category and priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TaskFilter {
    status: StatusFilter,
    category: Option<Category>,
    priority: Option<Priority>,
}

impl TaskFilter {
    /// Creates a filter returning every non-deleted task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the three filter keywords. `all` lifts a restriction.
    ///
    /// # Errors
    ///
    /// Returns a [`TaskDomainError`] naming the first unrecognised value.
    pub fn parse(status: &str, category: &str, priority: &str) -> Result<Self, TaskDomainError> {
        Ok(Self {
            status: StatusFilter::try_from(status)?,
            category: parse_restriction(category, |value| Category::try_from(value))?,
            priority: parse_restriction(priority, |value| Priority::try_from(value))?,
        })
    }

    /// Restricts the status.
    #[must_use]
    pub const fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Restricts the category.
    #[must_use]
    pub const fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Restricts the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns the status restriction.
    #[must_use]
    pub const fn status(&self) -> StatusFilter {
        self.status
    }

    /// Returns the category restriction, if any.
    #[must_use]
    pub const fn category(&self) -> Option<Category> {
        self.category
    }

    /// Returns the priority restriction, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns `true` when `task` satisfies every restriction.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.status.accepts(task.status())
            && self.category.is_none_or(|category| task.category() == category)
            && self.priority.is_none_or(|priority| task.priority() == priority)
    }
}

fn parse_restriction<T>(
    value: &str,
    parse: impl FnOnce(&str) -> Result<T, TaskDomainError>,
) -> Result<Option<T>, TaskDomainError> {
    if value.trim().eq_ignore_ascii_case(ALL) {
        return Ok(None);
    }
    parse(value).map(Some)
}

/// Listing order: due date ascending with undated tasks last, then newest
/// first.
#[must_use]
pub fn listing_order(left: &Task, right: &Task) -> Ordering {
    let by_due_date = match (left.due_date(), right.due_date()) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_due_date.then_with(|| right.created_at().cmp(&left.created_at()))
}

/// Sorts tasks in place using [`listing_order`].
pub fn sort_for_listing(tasks: &mut [Task]) {
    tasks.sort_by(listing_order);
}
