//! SQLite integration tests for task persistence.

use super::helpers::{SqliteServices, db};
use chrono::NaiveDate;
use rstest::rstest;
use tacheo::account::domain::AccountId;
use tacheo::error::ErrorKind;
use tacheo::storage;
use tacheo::task::{
    domain::{Category, Priority, Task, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
    services::{ListTasksRequest, SetTaskStatusRequest, TaskFieldsRequest},
};

fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.title().as_str()).collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_round_trips_every_field(db: SqliteServices) -> eyre::Result<()> {
    let owner = db.register("alice").await;
    let created = db
        .tasks
        .create(
            owner,
            TaskFieldsRequest::new("Revise")
                .with_description("chapter 3")
                .with_due_date("2026-06-01")
                .with_priority("urgent")
                .with_category("study"),
        )
        .await?;

    let fetched = db.tasks.find(owner, created.id()).await?;

    eyre::ensure!(fetched == created, "expected {created:?}, got {fetched:?}");
    eyre::ensure!(fetched.due_date() == NaiveDate::from_ymd_opt(2026, 6, 1));
    eyre::ensure!(fetched.priority() == Priority::Urgent);
    eyre::ensure!(fetched.category() == Category::Study);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_store_is_rejected(db: SqliteServices) -> eyre::Result<()> {
    let owner = db.register("alice").await;
    let task = db.tasks.create(owner, TaskFieldsRequest::new("once")).await?;

    let result = db.task_repository.store(&task).await;

    eyre::ensure!(matches!(result, Err(TaskRepositoryError::DuplicateTask(id)) if id == task.id()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_need_an_existing_owner(db: SqliteServices) {
    let result = db
        .tasks
        .create(AccountId::new(), TaskFieldsRequest::new("orphan"))
        .await;

    assert_eq!(result.err().map(|err| err.kind()), Some(ErrorKind::Storage));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_applies_filters_and_order(db: SqliteServices) -> eyre::Result<()> {
    let owner = db.register("alice").await;
    for (title, due, category, priority) in [
        ("A", "", "work", "urgent"),
        ("B", "2026-03-15", "work", "standard"),
        ("C", "2026-03-10", "sport", "urgent"),
        ("D", "", "work", "urgent"),
    ] {
        db.tasks
            .create(
                owner,
                TaskFieldsRequest::new(title)
                    .with_due_date(due)
                    .with_category(category)
                    .with_priority(priority),
            )
            .await?;
    }

    let all = db.tasks.list(owner, ListTasksRequest::default()).await?;
    let work_urgent = db
        .tasks
        .list(owner, ListTasksRequest::new("pending", "work", "urgent"))
        .await?;
    let completed = db
        .tasks
        .list(owner, ListTasksRequest::default().with_status("completed"))
        .await?;

    eyre::ensure!(titles(&all) == vec!["C", "B", "D", "A"]);
    eyre::ensure!(titles(&work_urgent) == vec!["D", "A"]);
    eyre::ensure!(completed.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_clears_optional_fields_and_keeps_status(db: SqliteServices) -> eyre::Result<()> {
    let owner = db.register("alice").await;
    let task = db
        .tasks
        .create(
            owner,
            TaskFieldsRequest::new("draft")
                .with_description("notes")
                .with_due_date("2026-04-01"),
        )
        .await?;
    db.tasks
        .set_status(owner, SetTaskStatusRequest::new(task.id(), "completed"))
        .await?;

    db.tasks
        .update(owner, task.id(), TaskFieldsRequest::new("final"))
        .await?;
    let stored = db.tasks.find(owner, task.id()).await?;

    eyre::ensure!(stored.title().as_str() == "final");
    eyre::ensure!(stored.description().is_none());
    eyre::ensure!(stored.due_date().is_none());
    eyre::ensure!(stored.status() == TaskStatus::Completed);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn writes_are_scoped_to_the_owner(db: SqliteServices) -> eyre::Result<()> {
    let alice = db.register("alice").await;
    let bob = db.register("bob").await;
    let task = db.tasks.create(alice, TaskFieldsRequest::new("mine")).await?;

    let status = db
        .task_repository
        .update_status(bob, task.id(), TaskStatus::Deleted)
        .await;
    let delete = db.task_repository.delete(bob, task.id()).await;

    eyre::ensure!(matches!(status, Err(TaskRepositoryError::NotFound(_))));
    eyre::ensure!(matches!(delete, Err(TaskRepositoryError::NotFound(_))));
    eyre::ensure!(db.tasks.find(alice, task.id()).await?.status() == TaskStatus::Pending);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn hard_delete_and_empty_trash(db: SqliteServices) -> eyre::Result<()> {
    let owner = db.register("alice").await;
    let keep = db.tasks.create(owner, TaskFieldsRequest::new("keep")).await?;
    let purge = db.tasks.create(owner, TaskFieldsRequest::new("purge")).await?;
    for title in ["trash 1", "trash 2"] {
        let task = db.tasks.create(owner, TaskFieldsRequest::new(title)).await?;
        db.tasks
            .set_status(owner, SetTaskStatusRequest::new(task.id(), "deleted"))
            .await?;
    }

    db.tasks.hard_delete(owner, purge.id()).await?;
    let again = db.tasks.hard_delete(owner, purge.id()).await;
    eyre::ensure!(again.err().map(|err| err.kind()) == Some(ErrorKind::NotFound));

    eyre::ensure!(db.tasks.empty_trash(owner).await? == 2);
    eyre::ensure!(titles(&db.tasks.list_all(owner).await?) == vec![keep.title().as_str()]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn schema_bootstrap_is_idempotent(db: SqliteServices) -> eyre::Result<()> {
    let owner = db.register("alice").await;
    db.tasks.create(owner, TaskFieldsRequest::new("survives")).await?;

    storage::apply_schema(&db.pool)?;

    eyre::ensure!(db.tasks.list_all(owner).await?.len() == 1);
    Ok(())
}
