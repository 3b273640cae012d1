//! Adapter implementations of the account ports.
//!
//! - [`memory`]: lock-guarded hash map, optionally cascading into an
//!   in-memory task store
//! - [`sqlite`]: Diesel-backed SQLite storage
//! - [`jwt`]: HS256 session tokens

pub mod jwt;
pub mod memory;
pub mod sqlite;
