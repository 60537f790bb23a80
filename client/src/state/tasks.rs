//! Task-list state for the tasks page.
//!
//! DESIGN
//! ======
//! Mirrors the server collection with optimistic-free reducers: the list only
//! changes after the API answers, so a failed call leaves items untouched and
//! records its message in `error`. Every task with a call in flight sits in
//! `pending` until its own answer arrives, so overlapping calls on different
//! cards keep each other's buttons disabled.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use std::collections::HashSet;

use crate::net::types::{Task, TaskStatus};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TasksState {
    pub items: Vec<Task>,
    pub loading: bool,
    /// Ids of tasks with a request in flight, used to disable their buttons.
    pub pending: HashSet<String>,
    pub error: Option<String>,
}

impl Default for TasksState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, pending: HashSet::new(), error: None }
    }
}

impl TasksState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn loaded(&mut self, items: Vec<Task>) {
        self.items = items;
        self.loading = false;
    }

    /// Mark a request as started; `None` is a create with no card yet.
    pub fn begin_request(&mut self, id: Option<&str>) {
        if let Some(id) = id {
            self.pending.insert(id.to_owned());
        }
        self.error = None;
    }

    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.contains(id)
    }

    pub fn apply_created(&mut self, task: Task) {
        self.items.push(task);
    }

    /// Replace the task with the same id; unknown ids are ignored.
    pub fn apply_updated(&mut self, task: Task) {
        self.pending.remove(&task.id);
        if let Some(slot) = self.items.iter_mut().find(|t| t.id == task.id) {
            *slot = task;
        }
    }

    pub fn apply_deleted(&mut self, id: &str) {
        self.pending.remove(id);
        self.items.retain(|t| t.id != id);
    }

    pub fn set_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Record a failed call on one task, releasing only that task.
    pub fn request_failed(&mut self, id: &str, message: String) {
        self.pending.remove(id);
        self.set_error(message);
    }

    pub fn count_with(&self, status: TaskStatus) -> usize {
        self.items.iter().filter(|t| t.status == status).count()
    }
}
