//! Tacheo: a personal task manager.
//!
//! Each account keeps its own tasks. A task is created `pending`, can be
//! completed and reopened, moved to the trash and restored, and is finally
//! purged on its own or by emptying the trash. Listings filter by status,
//! category and priority and are ordered by due date, then newest first.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and sessions
//! - **Adapters**: Concrete implementations of ports (SQLite, in-memory, JWT)
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle, filtering and trash management
//! - [`account`]: Accounts, credentials, sessions and profile photos
//! - [`http`]: JSON API over both services
//! - [`storage`]: SQLite pool and schema bootstrap
//! - [`config`]: Server configuration
//! - [`error`]: Client-facing error classes

pub mod account;
pub mod config;
pub mod error;
pub mod http;
pub mod storage;
pub mod task;
