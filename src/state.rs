//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It only carries the task repository; asset data is mocked client-side
//! and never reaches the server.

use std::sync::Arc;

use crate::services::task::TaskRepository;

#[derive(Clone)]
pub struct AppState {
    pub tasks: Arc<dyn TaskRepository>,
}

impl AppState {
    #[must_use]
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }
}
