//! In-memory integration tests for accounts and their tasks.

use super::helpers::{Services, services};
use chrono::Duration;
use rstest::rstest;
use tacheo::account::services::{
    AccountServiceError, LoginRequest, REMEMBERED_SESSION_DAYS, STANDARD_SESSION_DAYS,
};
use tacheo::task::services::TaskFieldsRequest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn session_from_login_resolves_to_the_account(services: Services) -> eyre::Result<()> {
    let id = services.register("alice").await;

    let session = services
        .accounts
        .login(LoginRequest::new("alice", "password").with_remember(true))
        .await?;

    eyre::ensure!(services.accounts.current_account_id(session.token.as_str()).await? == id);
    Ok(())
}

#[rstest]
#[case(false, STANDARD_SESSION_DAYS)]
#[case(true, REMEMBERED_SESSION_DAYS)]
#[tokio::test(flavor = "multi_thread")]
async fn sessions_expire_by_the_service_clock(
    services: Services,
    #[case] remember: bool,
    #[case] days: i64,
) -> eyre::Result<()> {
    let id = services.register("alice").await;
    let session = services
        .accounts
        .login(LoginRequest::new("alice", "password").with_remember(remember))
        .await?;

    services.clock.advance(Duration::days(days) - Duration::minutes(1));
    eyre::ensure!(services.accounts.current_account_id(session.token.as_str()).await? == id);

    services.clock.advance(Duration::minutes(2));
    let expired = services
        .accounts
        .current_account_id(session.token.as_str())
        .await;
    eyre::ensure!(matches!(expired, Err(AccountServiceError::Unauthenticated)));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn logout_ends_the_session(services: Services) -> eyre::Result<()> {
    let id = services.register("alice").await;
    let session = services
        .accounts
        .login(LoginRequest::new("alice", "password"))
        .await?;

    services.accounts.logout(id).await?;

    let after = services
        .accounts
        .current_account_id(session.token.as_str())
        .await;
    eyre::ensure!(matches!(after, Err(AccountServiceError::Unauthenticated)));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_an_account_removes_only_its_tasks(services: Services) -> eyre::Result<()> {
    let alice = services.register("alice").await;
    let bob = services.register("bob").await;
    for title in ["one", "two"] {
        services
            .tasks
            .create(alice, TaskFieldsRequest::new(title))
            .await?;
    }
    services
        .tasks
        .create(bob, TaskFieldsRequest::new("keep"))
        .await?;

    services.accounts.delete_account(alice, "password").await?;

    eyre::ensure!(services.tasks.list_all(alice).await?.is_empty());
    eyre::ensure!(services.tasks.list_all(bob).await?.len() == 1);
    eyre::ensure!(matches!(
        services
            .accounts
            .login(LoginRequest::new("alice", "password"))
            .await,
        Err(AccountServiceError::InvalidCredentials)
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn freed_username_can_be_registered_again(services: Services) -> eyre::Result<()> {
    let first = services.register("alice").await;
    services.accounts.delete_account(first, "password").await?;

    let second = services.register("alice").await;

    eyre::ensure!(first != second);
    Ok(())
}
