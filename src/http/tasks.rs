//! Task handlers. Every handler acts on the session's account only.

use super::{
    auth::CurrentAccount,
    dto::{ListQuery, PurgedResponse, StatusBody, SuccessResponse, TaskBody},
    error::ApiError,
    state::AppState,
};
use crate::task::{
    domain::{Task, TaskId, TaskSummary},
    services::{ListTasksRequest, SetTaskStatusRequest},
};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

type ApiResult<T> = Result<T, ApiError>;

fn task_id(raw: &str) -> ApiResult<TaskId> {
    Ok(raw.parse::<TaskId>()?)
}

pub async fn list(
    State(state): State<AppState>,
    Extension(CurrentAccount(owner)): Extension<CurrentAccount>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<Task>>> {
    let request = ListTasksRequest::new(query.filter, query.category_filter, query.priority_filter);
    Ok(Json(state.tasks.list(owner, request).await?))
}

pub async fn list_all(
    State(state): State<AppState>,
    Extension(CurrentAccount(owner)): Extension<CurrentAccount>,
) -> ApiResult<Json<Vec<Task>>> {
    Ok(Json(state.tasks.list_all(owner).await?))
}

pub async fn summary(
    State(state): State<AppState>,
    Extension(CurrentAccount(owner)): Extension<CurrentAccount>,
) -> ApiResult<Json<TaskSummary>> {
    Ok(Json(state.tasks.summary(owner).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(CurrentAccount(owner)): Extension<CurrentAccount>,
    Json(body): Json<TaskBody>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let task = state.tasks.create(owner, body.into()).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(CurrentAccount(owner)): Extension<CurrentAccount>,
    Path(id): Path<String>,
    Json(body): Json<TaskBody>,
) -> ApiResult<Json<Task>> {
    let task = state.tasks.update(owner, task_id(&id)?, body.into()).await?;
    Ok(Json(task))
}

pub async fn set_status(
    State(state): State<AppState>,
    Extension(CurrentAccount(owner)): Extension<CurrentAccount>,
    Path(id): Path<String>,
    Json(body): Json<StatusBody>,
) -> ApiResult<Json<Task>> {
    let request = SetTaskStatusRequest::new(task_id(&id)?, body.status);
    Ok(Json(state.tasks.set_status(owner, request).await?))
}

pub async fn hard_delete(
    State(state): State<AppState>,
    Extension(CurrentAccount(owner)): Extension<CurrentAccount>,
    Path(id): Path<String>,
) -> ApiResult<Json<SuccessResponse>> {
    state.tasks.hard_delete(owner, task_id(&id)?).await?;
    Ok(Json(SuccessResponse::OK))
}

pub async fn empty_trash(
    State(state): State<AppState>,
    Extension(CurrentAccount(owner)): Extension<CurrentAccount>,
) -> ApiResult<Json<PurgedResponse>> {
    let purged = state.tasks.empty_trash(owner).await?;
    Ok(Json(PurgedResponse { purged }))
}
