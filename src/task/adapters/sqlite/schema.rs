//! Diesel schema for task persistence.

diesel::table! {
    /// Task records, each owned by one account.
    tasks (id) {
        /// Task identifier (UUID text).
        id -> Text,
        /// Owning account identifier. Cascades on account deletion.
        owner_id -> Text,
        /// Trimmed, non-empty title.
        title -> Text,
        /// Optional description.
        description -> Nullable<Text>,
        /// Optional due date.
        due_date -> Nullable<Date>,
        /// Priority keyword.
        priority -> Text,
        /// Category keyword.
        category -> Text,
        /// Lifecycle status keyword.
        status -> Text,
        /// Creation timestamp (UTC).
        created_at -> Timestamp,
    }
}
