//! Domain model for the task lifecycle.
//!
//! Tasks are owned by exactly one account, move between `pending`,
//! `completed` and `deleted`, and are listed through conjunctive filters in
//! due-date order. Infrastructure concerns stay outside this boundary.

mod error;
mod fields;
mod filter;
mod ids;
mod status;
mod summary;
mod task;

pub use error::TaskDomainError;
pub use fields::{Category, Priority, TaskTitle, normalize_description, parse_due_date};
pub use filter::{StatusFilter, TaskFilter, listing_order, sort_for_listing};
pub use ids::TaskId;
pub use status::TaskStatus;
pub use summary::TaskSummary;
pub use task::{PersistedTaskData, Task, TaskDetails};
