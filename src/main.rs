#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::task::InMemoryTaskRepository;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env().expect("invalid server configuration");

    let tasks = if config.seed_tasks {
        InMemoryTaskRepository::seeded(config.task_latency)
    } else {
        InMemoryTaskRepository::new(config.task_latency)
    };
    tracing::info!(
        latency_ms = config.task_latency.as_millis(),
        seeded = config.seed_tasks,
        "task repository ready"
    );

    let state = state::AppState::new(Arc::new(tasks));
    let app = routes::app(state).expect("leptos configuration failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "rwa-portal listening");
    axum::serve(listener, app).await.expect("server failed");
}
