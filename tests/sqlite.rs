//! SQLite repository integration tests on temporary database files.
//!
//! Tests are organized into modules by functionality:
//! - `task_repository_tests`: owner-scoped writes, filters and ordering
//! - `account_repository_tests`: uniqueness, updates and cascading deletion

mod test_helpers;

mod sqlite {
    pub mod helpers;

    mod account_repository_tests;
    mod task_repository_tests;
}
