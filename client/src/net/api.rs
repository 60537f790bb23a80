//! REST helpers for the mock task API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since the task list is only
//! fetched after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, String>`. The server's `{ "error": ... }`
//! body is surfaced verbatim when present so the task list can show
//! "Task not found" instead of a bare status code.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{CreateTaskInput, Task, UpdateTaskInput};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiErrorBody;

#[cfg(any(test, feature = "hydrate"))]
const TASKS_ENDPOINT: &str = "/api/tasks";

#[cfg(any(test, feature = "hydrate"))]
fn task_endpoint(id: &str) -> String {
    format!("{TASKS_ENDPOINT}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16, body: Option<ApiErrorBody>) -> String {
    match body {
        Some(body) if !body.error.is_empty() => body.error,
        _ => format!("{action} failed: {status}"),
    }
}

#[cfg(feature = "hydrate")]
async fn failure(action: &str, resp: gloo_net::http::Response) -> String {
    let body = resp.json::<ApiErrorBody>().await.ok();
    request_failed_message(action, resp.status(), body)
}

/// Fetch every task via `GET /api/tasks`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_tasks() -> Result<Vec<Task>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(TASKS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("fetch tasks", resp).await);
        }
        resp.json::<Vec<Task>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a task via `POST /api/tasks`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn create_task(input: &CreateTaskInput) -> Result<Task, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(TASKS_ENDPOINT)
            .json(input)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("create task", resp).await);
        }
        resp.json::<Task>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        Err("not available on server".to_owned())
    }
}

/// Patch a task via `PATCH /api/tasks/{id}`.
///
/// # Errors
///
/// Returns the server's error message (e.g. "Task not found") or a transport error.
pub async fn update_task(id: &str, input: &UpdateTaskInput) -> Result<Task, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch(&task_endpoint(id))
            .json(input)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("update task", resp).await);
        }
        resp.json::<Task>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, input);
        Err("not available on server".to_owned())
    }
}

/// Delete a task via `DELETE /api/tasks/{id}`.
///
/// # Errors
///
/// Returns the server's error message (e.g. "Task not found") or a transport error.
pub async fn delete_task(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&task_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("delete task", resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}
