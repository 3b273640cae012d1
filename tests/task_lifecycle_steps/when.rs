//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use tacheo::task::services::SetTaskStatusRequest;

#[when(r#"the task status is set to "{status}""#)]
fn set_task_status(world: &mut TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let result = run_async(
        world
            .service
            .set_status(world.owner, SetTaskStatusRequest::new(task_id, status)),
    );
    if let Ok(ref updated) = result {
        world.last_task = Some(updated.clone());
    }
    world.last_status_result = Some(result);
    Ok(())
}

#[when("the trash is emptied")]
fn empty_trash(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let purged = run_async(world.service.empty_trash(world.owner)).wrap_err("empty trash")?;
    world.purged = Some(purged);
    Ok(())
}
