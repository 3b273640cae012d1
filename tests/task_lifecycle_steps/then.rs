//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use rstest_bdd_macros::then;
use tacheo::task::{
    domain::{TaskDomainError, TaskStatus, TaskSummary},
    services::TaskLifecycleError,
};

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world.task()?;
    let stored = run_async(world.service.find(world.owner, task.id()))?;

    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            stored.status()
        ));
    }
    Ok(())
}

#[then("the summary counts {total:u64} total, {pending:u64} pending and {completed:u64} completed")]
fn summary_counts(
    world: &TaskLifecycleWorld,
    total: u64,
    pending: u64,
    completed: u64,
) -> Result<(), eyre::Report> {
    let summary = run_async(world.service.summary(world.owner))?;
    let expected = TaskSummary {
        total,
        pending,
        completed,
    };
    if summary != expected {
        return Err(eyre::eyre!("expected {expected:?}, found {summary:?}"));
    }
    Ok(())
}

#[then("the status change fails with a forbidden transition error")]
fn fails_with_forbidden_transition(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_status_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing status change result"))?;

    if !matches!(
        result,
        Err(TaskLifecycleError::Domain(
            TaskDomainError::InvalidStatusTransition { .. }
        ))
    ) {
        return Err(eyre::eyre!(
            "expected InvalidStatusTransition error, got {result:?}"
        ));
    }
    Ok(())
}

#[then("the status change fails with an unknown status error")]
fn fails_with_unknown_status(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_status_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing status change result"))?;

    if !matches!(
        result,
        Err(TaskLifecycleError::Domain(TaskDomainError::InvalidStatus(_)))
    ) {
        return Err(eyre::eyre!("expected InvalidStatus error, got {result:?}"));
    }
    Ok(())
}

#[then("{count:u64} task was purged")]
fn tasks_purged(world: &TaskLifecycleWorld, count: u64) -> Result<(), eyre::Report> {
    if world.purged != Some(count) {
        return Err(eyre::eyre!(
            "expected {count} purged, found {:?}",
            world.purged
        ));
    }
    Ok(())
}

#[then(r#"the listing of every task shows "{title}""#)]
fn listing_shows(world: &TaskLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let tasks = run_async(world.service.list_all(world.owner))?;
    let titles: Vec<&str> = tasks.iter().map(|task| task.title().as_str()).collect();
    if titles != vec![title.as_str()] {
        return Err(eyre::eyre!("expected only {title}, found {titles:?}"));
    }
    Ok(())
}
