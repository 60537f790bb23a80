use std::sync::Arc;
use std::time::Duration;

use client::net::types::TaskStatus;

use super::*;
use crate::services::task::InMemoryTaskRepository;

fn test_state() -> AppState {
    AppState::new(Arc::new(InMemoryTaskRepository::seeded(Duration::ZERO)))
}

#[test]
fn task_error_to_status_maps_not_found() {
    assert_eq!(task_error_to_status(&TaskError::NotFound("9".into())), StatusCode::NOT_FOUND);
}

#[test]
fn not_found_body_carries_fixed_message() {
    let (status, Json(body)) = task_error(TaskError::NotFound("9".into()));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "error": "Task not found" }));
}

#[tokio::test]
async fn list_returns_seeded_tasks() {
    let Json(tasks) = list_tasks(State(test_state())).await;
    assert_eq!(tasks.len(), 3);
}

#[tokio::test]
async fn get_unknown_task_is_404() {
    let state = test_state();
    let Json(task) = get_task(State(state.clone()), Path("1".into())).await.unwrap();
    assert_eq!(task.title, "Setup Project Structure");

    let (status, _) = get_task(State(state), Path("nope".into())).await.unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_returns_201_with_pending_task() {
    let state = test_state();
    let body = CreateTaskInput { title: "New".into(), description: "Thing".into() };
    let (status, Json(task)) = create_task(State(state.clone()), Json(body)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(state.tasks.list().await.len(), 4);
}

#[tokio::test]
async fn patch_updates_status_only() {
    let state = test_state();
    let Json(task) = update_task(
        State(state),
        Path("3".into()),
        Json(UpdateTaskInput::status(TaskStatus::Completed)),
    )
    .await
    .unwrap();
    assert_eq!(task.status, TaskStatus::Completed);
    assert_eq!(task.title, "Add Styling");
}

#[tokio::test]
async fn patch_unknown_task_is_404() {
    let (status, Json(body)) = update_task(State(test_state()), Path("x".into()), Json(UpdateTaskInput::default()))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.error, "Task not found");
}

#[tokio::test]
async fn delete_returns_204_then_404() {
    let state = test_state();
    assert_eq!(delete_task(State(state.clone()), Path("2".into())).await.unwrap(), StatusCode::NO_CONTENT);
    let (status, _) = delete_task(State(state), Path("2".into())).await.unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
}
