//! In-memory integration tests for task lifecycle operations.

use super::helpers::{Services, services};
use rstest::rstest;
use tacheo::error::ErrorKind;
use tacheo::task::{
    domain::{Task, TaskStatus, TaskSummary},
    services::{ListTasksRequest, SetTaskStatusRequest, TaskFieldsRequest},
};

fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.title().as_str()).collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn trash_restore_and_purge_cycle(services: Services) -> eyre::Result<()> {
    let owner = services.register("alice").await;
    let task = services
        .tasks
        .create(owner, TaskFieldsRequest::new("Buy milk"))
        .await?;

    for status in ["completed", "deleted", "pending", "completed", "deleted"] {
        let changed = services
            .tasks
            .set_status(owner, SetTaskStatusRequest::new(task.id(), status))
            .await?;
        eyre::ensure!(changed.status().as_str() == status);
    }

    let trash = services
        .tasks
        .list(owner, ListTasksRequest::default().with_status("deleted"))
        .await?;
    eyre::ensure!(titles(&trash) == vec!["Buy milk"]);
    eyre::ensure!(services.tasks.summary(owner).await? == TaskSummary::default());

    eyre::ensure!(services.tasks.empty_trash(owner).await? == 1);
    let missing = services.tasks.find(owner, task.id()).await;
    eyre::ensure!(missing.err().map(|err| err.kind()) == Some(ErrorKind::NotFound));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listings_are_owner_scoped(services: Services) -> eyre::Result<()> {
    let alice = services.register("alice").await;
    let bob = services.register("bob").await;
    services
        .tasks
        .create(alice, TaskFieldsRequest::new("alice's"))
        .await?;
    let bobs = services
        .tasks
        .create(bob, TaskFieldsRequest::new("bob's"))
        .await?;

    eyre::ensure!(titles(&services.tasks.list_all(alice).await?) == vec!["alice's"]);
    eyre::ensure!(titles(&services.tasks.list_all(bob).await?) == vec!["bob's"]);

    let stolen = services
        .tasks
        .set_status(alice, SetTaskStatusRequest::new(bobs.id(), "deleted"))
        .await;
    eyre::ensure!(stolen.err().map(|err| err.kind()) == Some(ErrorKind::NotFound));
    eyre::ensure!(services.tasks.find(bob, bobs.id()).await?.status() == TaskStatus::Pending);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_all_includes_trash_in_listing_order(services: Services) -> eyre::Result<()> {
    let owner = services.register("alice").await;
    let undated = services
        .tasks
        .create(owner, TaskFieldsRequest::new("undated"))
        .await?;
    services
        .tasks
        .create(owner, TaskFieldsRequest::new("later").with_due_date("2026-05-02"))
        .await?;
    services
        .tasks
        .create(owner, TaskFieldsRequest::new("sooner").with_due_date("2026-05-01"))
        .await?;
    services
        .tasks
        .set_status(owner, SetTaskStatusRequest::new(undated.id(), "deleted"))
        .await?;

    let everything = services.tasks.list_all(owner).await?;
    let active = services.tasks.list(owner, ListTasksRequest::default()).await?;

    eyre::ensure!(titles(&everything) == vec!["sooner", "later", "undated"]);
    eyre::ensure!(titles(&active) == vec!["sooner", "later"]);
    Ok(())
}
