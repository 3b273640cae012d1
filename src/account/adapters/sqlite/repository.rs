//! SQLite repository implementation for account storage.

use super::{
    models::{AccountChangeset, AccountRow, NewAccountRow},
    schema::accounts,
};
use crate::account::{
    domain::{Account, AccountId, PasswordHash, PersistedAccountData, ProfilePhoto, Username},
    ports::{AccountRepository, AccountRepositoryError, AccountRepositoryResult},
};
use crate::storage::SqlitePool;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sqlite::SqliteConnection;

/// SQLite-backed account repository.
///
/// Task rows reference accounts with `ON DELETE CASCADE`, so deleting an
/// account here also removes its tasks.
#[derive(Debug, Clone)]
pub struct SqliteAccountRepository {
    pool: SqlitePool,
}

impl SqliteAccountRepository {
    /// Creates a new repository from a SQLite connection pool.
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> AccountRepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> AccountRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(AccountRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(AccountRepositoryError::persistence)?
    }
}

#[async_trait]
impl AccountRepository for SqliteAccountRepository {
    async fn store(&self, account: &Account) -> AccountRepositoryResult<()> {
        let username = account.username().clone();
        let new_row = NewAccountRow {
            id: account.id().to_string(),
            username: username.as_str().to_owned(),
            password_hash: account.password_hash().as_str().to_owned(),
            profile_photo: account.profile_photo().map(|photo| photo.as_str().to_owned()),
            session_epoch: account.session_epoch(),
            created_at: account.created_at().naive_utc(),
        };

        self.run_blocking(move |connection| {
            diesel::insert_into(accounts::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| map_write_error(err, username))?;
            Ok(())
        })
        .await
    }

    async fn update(&self, account: &Account) -> AccountRepositoryResult<()> {
        let id = account.id();
        let username = account.username().clone();
        let changes = AccountChangeset {
            username: username.as_str().to_owned(),
            password_hash: account.password_hash().as_str().to_owned(),
            profile_photo: account.profile_photo().map(|photo| photo.as_str().to_owned()),
            session_epoch: account.session_epoch(),
        };

        self.run_blocking(move |connection| {
            let updated = diesel::update(accounts::table.filter(accounts::id.eq(id.to_string())))
                .set(&changes)
                .execute(connection)
                .map_err(|err| map_write_error(err, username))?;
            if updated == 0 {
                return Err(AccountRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: AccountId) -> AccountRepositoryResult<Option<Account>> {
        self.run_blocking(move |connection| {
            let row = accounts::table
                .filter(accounts::id.eq(id.to_string()))
                .select(AccountRow::as_select())
                .first::<AccountRow>(connection)
                .optional()
                .map_err(AccountRepositoryError::persistence)?;
            row.map(row_to_account).transpose()
        })
        .await
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> AccountRepositoryResult<Option<Account>> {
        let lookup = username.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = accounts::table
                .filter(accounts::username.eq(lookup))
                .select(AccountRow::as_select())
                .first::<AccountRow>(connection)
                .optional()
                .map_err(AccountRepositoryError::persistence)?;
            row.map(row_to_account).transpose()
        })
        .await
    }

    async fn delete(&self, id: AccountId) -> AccountRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(accounts::table.filter(accounts::id.eq(id.to_string())))
                .execute(connection)
                .map_err(AccountRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(AccountRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn map_write_error(err: DieselError, username: Username) -> AccountRepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            AccountRepositoryError::DuplicateUsername(username)
        }
        _ => AccountRepositoryError::persistence(err),
    }
}

fn row_to_account(row: AccountRow) -> AccountRepositoryResult<Account> {
    let AccountRow {
        id: persisted_id,
        username: persisted_username,
        password_hash: persisted_hash,
        profile_photo,
        session_epoch,
        created_at,
    } = row;

    let id = persisted_id
        .parse::<AccountId>()
        .map_err(AccountRepositoryError::invalid_persisted_data)?;
    let username =
        Username::new(persisted_username).map_err(AccountRepositoryError::invalid_persisted_data)?;
    let password_hash = PasswordHash::from_encoded(persisted_hash)
        .map_err(AccountRepositoryError::invalid_persisted_data)?;

    Ok(Account::from_persisted(PersistedAccountData {
        id,
        username,
        password_hash,
        profile_photo: profile_photo.map(ProfilePhoto::from_persisted),
        session_epoch,
        created_at: created_at.and_utc(),
    }))
}
