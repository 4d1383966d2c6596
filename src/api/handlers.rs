//! Route handlers. Each one parses its input, calls one lifecycle operation
//! and maps the result.

use super::{
    ApiError, AppState,
    dto::{
        CreateTaskBody, DeletedTaskResponse, MessageResponse, RestoreResponse, TaskResponse,
        UpdateStatusBody,
    },
};
use crate::task::{
    domain::{DeletedTaskId, TaskId},
    ports::{DeletedTaskRepository, TaskRepository},
    services::UpdateTaskStatusRequest,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use mockable::Clock;
use serde_json::{Value, json};

type ApiResult<T> = Result<Json<T>, ApiError>;

pub(super) async fn healthz() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

pub(super) async fn list_tasks<R, D, C>(
    State(state): State<AppState<R, D, C>>,
) -> ApiResult<Vec<TaskResponse>>
where
    R: TaskRepository,
    D: DeletedTaskRepository,
    C: Clock + Send + Sync,
{
    let tasks = state.service().list_active().await?;
    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}

pub(super) async fn create_task<R, D, C>(
    State(state): State<AppState<R, D, C>>,
    payload: Result<Json<CreateTaskBody>, JsonRejection>,
) -> ApiResult<TaskResponse>
where
    R: TaskRepository,
    D: DeletedTaskRepository,
    C: Clock + Send + Sync,
{
    let Json(body) = payload?;
    let task = state.service().create(body.into_request()?).await?;
    Ok(Json(TaskResponse::from(&task)))
}

pub(super) async fn update_task_status<R, D, C>(
    State(state): State<AppState<R, D, C>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateStatusBody>, JsonRejection>,
) -> ApiResult<TaskResponse>
where
    R: TaskRepository,
    D: DeletedTaskRepository,
    C: Clock + Send + Sync,
{
    let task_id = raw_id.parse::<TaskId>()?;
    let Json(body) = payload?;
    let request = UpdateTaskStatusRequest::new(task_id, body.status()?);
    let task = state.service().update_status(request).await?;
    Ok(Json(TaskResponse::from(&task)))
}

pub(super) async fn soft_delete_task<R, D, C>(
    State(state): State<AppState<R, D, C>>,
    Path(raw_id): Path<String>,
) -> ApiResult<MessageResponse>
where
    R: TaskRepository,
    D: DeletedTaskRepository,
    C: Clock + Send + Sync,
{
    let task_id = raw_id.parse::<TaskId>()?;
    state.service().soft_delete(task_id).await?;
    Ok(Json(MessageResponse::new("Task moved to deleted list")))
}

pub(super) async fn list_deleted_tasks<R, D, C>(
    State(state): State<AppState<R, D, C>>,
) -> ApiResult<Vec<DeletedTaskResponse>>
where
    R: TaskRepository,
    D: DeletedTaskRepository,
    C: Clock + Send + Sync,
{
    let deleted = state.service().list_deleted().await?;
    Ok(Json(deleted.iter().map(DeletedTaskResponse::from).collect()))
}

pub(super) async fn restore_task<R, D, C>(
    State(state): State<AppState<R, D, C>>,
    Path(raw_id): Path<String>,
) -> ApiResult<RestoreResponse>
where
    R: TaskRepository,
    D: DeletedTaskRepository,
    C: Clock + Send + Sync,
{
    let deleted_task_id = raw_id.parse::<DeletedTaskId>()?;
    let task = state.service().restore(deleted_task_id).await?;
    Ok(Json(RestoreResponse {
        message: "Task restored successfully".to_owned(),
        task: TaskResponse::from(&task),
    }))
}

pub(super) async fn purge_task<R, D, C>(
    State(state): State<AppState<R, D, C>>,
    Path(raw_id): Path<String>,
) -> ApiResult<MessageResponse>
where
    R: TaskRepository,
    D: DeletedTaskRepository,
    C: Clock + Send + Sync,
{
    let deleted_task_id = raw_id.parse::<DeletedTaskId>()?;
    state.service().purge(deleted_task_id).await?;
    Ok(Json(MessageResponse::new("Deleted task permanently removed")))
}
