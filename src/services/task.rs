//! In-memory task store with artificial latency.
//!
//! DESIGN
//! ======
//! Handlers talk to `TaskRepository`, never to the vector directly, so a
//! persistent store can be swapped in through `AppState`. The in-memory
//! implementation sleeps before every call to mimic a remote service and
//! loses everything on restart.
//!
//! ERROR HANDLING
//! ==============
//! The only failure is an unknown id (`TaskError::NotFound`), which routes
//! map to 404.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::time::Duration;

use client::net::types::{CreateTaskInput, Task, TaskStatus, UpdateTaskInput};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("Task not found")]
    NotFound(String),
}

#[async_trait::async_trait]
pub trait TaskRepository: Send + Sync {
    async fn list(&self) -> Vec<Task>;
    async fn get(&self, id: &str) -> Option<Task>;
    async fn create(&self, input: CreateTaskInput) -> Task;

    /// # Errors
    ///
    /// Returns [`TaskError::NotFound`] for an unknown id.
    async fn update(&self, id: &str, input: UpdateTaskInput) -> Result<Task, TaskError>;

    /// # Errors
    ///
    /// Returns [`TaskError::NotFound`] for an unknown id.
    async fn delete(&self, id: &str) -> Result<(), TaskError>;
}

pub struct InMemoryTaskRepository {
    tasks: RwLock<Vec<Task>>,
    latency: Duration,
}

impl InMemoryTaskRepository {
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self::with_tasks(Vec::new(), latency)
    }

    /// Repository pre-filled with the three demo tasks.
    #[must_use]
    pub fn seeded(latency: Duration) -> Self {
        Self::with_tasks(seed_tasks(), latency)
    }

    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>, latency: Duration) -> Self {
        Self { tasks: RwLock::new(tasks), latency }
    }
}

async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

#[async_trait::async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list(&self) -> Vec<Task> {
        simulate_latency(self.latency).await;
        self.tasks.read().await.clone()
    }

    async fn get(&self, id: &str) -> Option<Task> {
        // Single lookups wait half the usual latency.
        simulate_latency(self.latency / 2).await;
        self.tasks.read().await.iter().find(|t| t.id == id).cloned()
    }

    async fn create(&self, input: CreateTaskInput) -> Task {
        simulate_latency(self.latency).await;
        let now = now_rfc3339();
        let task = Task {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            description: input.description,
            status: TaskStatus::Pending,
            created_at: now.clone(),
            updated_at: now,
        };
        self.tasks.write().await.push(task.clone());
        task
    }

    async fn update(&self, id: &str, input: UpdateTaskInput) -> Result<Task, TaskError> {
        simulate_latency(self.latency).await;
        let mut tasks = self.tasks.write().await;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TaskError::NotFound(id.to_owned()))?;
        input.apply_to(task);
        task.updated_at = now_rfc3339();
        Ok(task.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), TaskError> {
        simulate_latency(self.latency).await;
        let mut tasks = self.tasks.write().await;
        let index = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TaskError::NotFound(id.to_owned()))?;
        tasks.remove(index);
        Ok(())
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| OffsetDateTime::UNIX_EPOCH.to_string())
}

fn seed_task(id: &str, title: &str, description: &str, status: TaskStatus, at: &str) -> Task {
    Task {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        status,
        created_at: at.to_owned(),
        updated_at: at.to_owned(),
    }
}

pub fn seed_tasks() -> Vec<Task> {
    vec![
        seed_task(
            "1",
            "Setup Project Structure",
            "Create a clean and simple project structure",
            TaskStatus::Completed,
            "2025-11-10T00:00:00.000Z",
        ),
        seed_task(
            "2",
            "Build Task Feature",
            "Implement task management functionality",
            TaskStatus::InProgress,
            "2025-11-11T00:00:00.000Z",
        ),
        seed_task(
            "3",
            "Add Styling",
            "Style the components with the portal stylesheet",
            TaskStatus::Pending,
            "2025-11-11T00:00:00.000Z",
        ),
    ]
}
