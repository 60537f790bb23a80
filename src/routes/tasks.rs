//! Mock task CRUD routes.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use client::net::types::{ApiErrorBody, CreateTaskInput, Task, UpdateTaskInput};

use crate::services::task::TaskError;
use crate::state::AppState;

/// Error half of every task handler.
pub type ApiError = (StatusCode, Json<ApiErrorBody>);

pub(crate) fn task_error_to_status(err: &TaskError) -> StatusCode {
    match err {
        TaskError::NotFound(_) => StatusCode::NOT_FOUND,
    }
}

fn task_error(err: TaskError) -> ApiError {
    if let TaskError::NotFound(id) = &err {
        tracing::debug!(task_id = %id, "task not found");
    }
    (task_error_to_status(&err), Json(ApiErrorBody { error: err.to_string() }))
}

/// `GET /api/tasks`: list all tasks.
pub async fn list_tasks(State(state): State<AppState>) -> Json<Vec<Task>> {
    Json(state.tasks.list().await)
}

/// `GET /api/tasks/:id`: fetch one task.
pub async fn get_task(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Task>, ApiError> {
    state
        .tasks
        .get(&id)
        .await
        .map(Json)
        .ok_or_else(|| task_error(TaskError::NotFound(id)))
}

/// `POST /api/tasks`: create a pending task.
pub async fn create_task(
    State(state): State<AppState>,
    Json(body): Json<CreateTaskInput>,
) -> (StatusCode, Json<Task>) {
    let task = state.tasks.create(body).await;
    tracing::info!(task_id = %task.id, "task created");
    (StatusCode::CREATED, Json(task))
}

/// `PATCH /api/tasks/:id`: merge the supplied fields.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateTaskInput>,
) -> Result<Json<Task>, ApiError> {
    state.tasks.update(&id, body).await.map(Json).map_err(task_error)
}

/// `DELETE /api/tasks/:id`: remove a task.
pub async fn delete_task(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    state.tasks.delete(&id).await.map_err(task_error)?;
    tracing::info!(task_id = %id, "task deleted");
    Ok(StatusCode::NO_CONTENT)
}
