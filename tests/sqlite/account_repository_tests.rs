//! SQLite integration tests for account persistence.

use super::helpers::{SqliteServices, db};
use rstest::rstest;
use tacheo::account::{
    domain::AccountId,
    ports::AccountRepositoryError,
    services::{AccountServiceError, ChangePasswordRequest, LoginRequest},
};
use tacheo::task::services::TaskFieldsRequest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn usernames_are_unique(db: SqliteServices) -> eyre::Result<()> {
    let alice = db.register("alice").await;
    db.register("bob").await;

    let taken = db.accounts.rename(alice, "bob").await;

    eyre::ensure!(matches!(
        taken,
        Err(AccountServiceError::Repository(
            AccountRepositoryError::DuplicateUsername(_)
        ))
    ));
    eyre::ensure!(db.accounts.profile(alice).await?.username().as_str() == "alice");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn profile_changes_persist(db: SqliteServices) -> eyre::Result<()> {
    let id = db.register("alice").await;

    db.accounts.rename(id, "alicia").await?;
    db.accounts
        .change_password(id, ChangePasswordRequest::new("password", "hunter2", "hunter2"))
        .await?;
    let photo = db.accounts.set_profile_photo(id, "me.jpeg").await?;

    let session = db
        .accounts
        .login(LoginRequest::new("alicia", "hunter2"))
        .await?;
    eyre::ensure!(session.account.id() == id);
    eyre::ensure!(session.account.profile_photo() == Some(&photo.current));

    eyre::ensure!(db.accounts.clear_profile_photo(id).await? == Some(photo.current));
    eyre::ensure!(db.accounts.profile(id).await?.profile_photo().is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn logout_is_persisted(db: SqliteServices) -> eyre::Result<()> {
    let id = db.register("alice").await;
    let before = db.accounts.login(LoginRequest::new("alice", "password")).await?;

    db.accounts.logout(id).await?;

    eyre::ensure!(db.accounts.profile(id).await?.session_epoch() == 1);
    let stale = db.accounts.current_account_id(before.token.as_str()).await;
    eyre::ensure!(matches!(stale, Err(AccountServiceError::Unauthenticated)));
    let after = db.accounts.login(LoginRequest::new("alice", "password")).await?;
    eyre::ensure!(db.accounts.current_account_id(after.token.as_str()).await? == id);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_an_account_cascades_to_its_tasks(db: SqliteServices) -> eyre::Result<()> {
    let alice = db.register("alice").await;
    let bob = db.register("bob").await;
    db.tasks.create(alice, TaskFieldsRequest::new("a1")).await?;
    db.tasks.create(alice, TaskFieldsRequest::new("a2")).await?;
    db.tasks.create(bob, TaskFieldsRequest::new("b1")).await?;

    db.accounts.delete_account(alice, "password").await?;

    eyre::ensure!(!db.accounts.account_exists(alice).await?);
    eyre::ensure!(db.tasks.list_all(alice).await?.is_empty());
    eyre::ensure!(db.tasks.list_all(bob).await?.len() == 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_account_is_not_found(db: SqliteServices) {
    let result = db.accounts.delete_account(AccountId::new(), "password").await;

    assert!(matches!(
        result,
        Err(AccountServiceError::Repository(AccountRepositoryError::NotFound(_)))
    ));
}
