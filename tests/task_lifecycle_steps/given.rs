//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tacheo::task::services::{SetTaskStatusRequest, TaskFieldsRequest};

#[given(r#"a task titled "{title}""#)]
fn task_titled(world: &mut TaskLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let created = run_async(
        world
            .service
            .create(world.owner, TaskFieldsRequest::new(title)),
    )
    .wrap_err("create task for scenario")?;
    world.last_task = Some(created);
    Ok(())
}

#[given(r#"the task has been moved to "{status}""#)]
fn task_moved_to(world: &mut TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let changed = run_async(
        world
            .service
            .set_status(world.owner, SetTaskStatusRequest::new(task_id, status)),
    )
    .wrap_err("change task status in scenario setup")?;
    world.last_task = Some(changed);
    Ok(())
}
