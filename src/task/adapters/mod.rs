//! Adapter implementations of the task ports.
//!
//! - [`memory`]: lock-guarded hash map, used by tests and embedders
//! - [`sqlite`]: Diesel-backed SQLite storage used by the server

pub mod memory;
pub mod sqlite;
