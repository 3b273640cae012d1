//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskRow {
    /// Task identifier.
    pub id: String,
    /// Owning account identifier.
    pub owner_id: String,
    /// Title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Priority keyword.
    pub priority: String,
    /// Category keyword.
    pub category: String,
    /// Status keyword.
    pub status: String,
    /// Creation timestamp (UTC).
    pub created_at: NaiveDateTime,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: String,
    /// Owning account identifier.
    pub owner_id: String,
    /// Title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Priority keyword.
    pub priority: String,
    /// Category keyword.
    pub category: String,
    /// Status keyword.
    pub status: String,
    /// Creation timestamp (UTC).
    pub created_at: NaiveDateTime,
}

/// Changeset for a full edit. Cleared optional fields are written as `NULL`.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskDetailsChangeset {
    /// Title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Priority keyword.
    pub priority: String,
    /// Category keyword.
    pub category: String,
}
