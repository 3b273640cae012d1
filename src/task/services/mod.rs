//! Application services for task lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{
    ListTasksRequest, SetTaskStatusRequest, TaskFieldsRequest, TaskLifecycleError,
    TaskLifecycleResult, TaskLifecycleService,
};
