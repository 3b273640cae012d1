//! Behaviour tests for the task lifecycle.

#[path = "task_lifecycle_steps/mod.rs"]
mod task_lifecycle_steps_defs;

use rstest_bdd_macros::scenario;
use task_lifecycle_steps_defs::world::{TaskLifecycleWorld, world};

#[scenario(
    path = "tests/features/task_lifecycle.feature",
    name = "Complete a pending task"
)]
#[tokio::test(flavor = "multi_thread")]
async fn complete_pending_task(world: TaskLifecycleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_lifecycle.feature",
    name = "Restore a task from the trash"
)]
#[tokio::test(flavor = "multi_thread")]
async fn restore_from_trash(world: TaskLifecycleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_lifecycle.feature",
    name = "Reject completing a trashed task"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reject_completing_trashed_task(world: TaskLifecycleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_lifecycle.feature",
    name = "Reject an unknown status"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reject_unknown_status(world: TaskLifecycleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_lifecycle.feature",
    name = "Emptying the trash purges only trashed tasks"
)]
#[tokio::test(flavor = "multi_thread")]
async fn empty_trash_purges_trashed_tasks(world: TaskLifecycleWorld) {
    let _ = world;
}
