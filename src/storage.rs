//! SQLite connection pooling and schema bootstrap shared by the Diesel
//! adapters.

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError};
use diesel::sqlite::SqliteConnection;
use thiserror::Error;
use tracing::info;

/// SQLite connection pool type used by every Diesel adapter.
pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// Schema for accounts and their tasks.
pub const SCHEMA_SQL: &str =
    include_str!("../migrations/2026-10-19-000000_create_accounts_and_tasks/up.sql");

/// Errors raised while opening or preparing the database.
#[derive(Debug, Error)]
pub enum StorageSetupError {
    /// The pool could not be built or could not hand out a connection.
    #[error("failed to open database pool: {0}")]
    Pool(#[from] PoolError),

    /// A schema statement failed.
    #[error("failed to apply schema: {0}")]
    Schema(#[from] diesel::result::Error),
}

/// Per-connection settings. Foreign keys must be switched on for every
/// SQLite connection for the ownership cascade to apply.
#[derive(Debug, Clone, Copy)]
struct ConnectionOptions {
    busy_timeout_ms: u32,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, connection: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        connection
            .batch_execute(&format!(
                "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
                self.busy_timeout_ms
            ))
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Opens a connection pool for `database_url` (a file path or
/// `:memory:`).
///
/// # Errors
///
/// Returns [`StorageSetupError::Pool`] when the first connection cannot be
/// established.
pub fn connect(database_url: &str, max_size: u32) -> Result<SqlitePool, StorageSetupError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(max_size.max(1))
        .connection_customizer(Box::new(ConnectionOptions {
            busy_timeout_ms: 5_000,
        }))
        .build(manager)?;
    Ok(pool)
}

/// Creates the tables and indexes if they do not exist yet.
///
/// # Errors
///
/// Returns [`StorageSetupError`] when no connection is available or a
/// statement fails.
pub fn apply_schema(pool: &SqlitePool) -> Result<(), StorageSetupError> {
    let mut connection = pool.get()?;
    connection.batch_execute(SCHEMA_SQL)?;
    info!("database schema ready");
    Ok(())
}
