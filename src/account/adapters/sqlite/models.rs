//! Diesel row models for account persistence.

use super::schema::accounts;
use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Query result row for account records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountRow {
    /// Account identifier.
    pub id: String,
    /// Login name.
    pub username: String,
    /// Encoded password digest.
    pub password_hash: String,
    /// Optional photo reference.
    pub profile_photo: Option<String>,
    /// Session epoch.
    pub session_epoch: i64,
    /// Registration timestamp (UTC).
    pub created_at: NaiveDateTime,
}

/// Insert model for account records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = accounts)]
pub struct NewAccountRow {
    /// Account identifier.
    pub id: String,
    /// Login name.
    pub username: String,
    /// Encoded password digest.
    pub password_hash: String,
    /// Optional photo reference.
    pub profile_photo: Option<String>,
    /// Session epoch.
    pub session_epoch: i64,
    /// Registration timestamp (UTC).
    pub created_at: NaiveDateTime,
}

/// Changeset for the mutable account fields. A cleared photo is written as
/// `NULL`.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = accounts)]
#[diesel(treat_none_as_null = true)]
pub struct AccountChangeset {
    /// Login name.
    pub username: String,
    /// Encoded password digest.
    pub password_hash: String,
    /// Optional photo reference.
    pub profile_photo: Option<String>,
    /// Session epoch.
    pub session_epoch: i64,
}
