//! Card for one mock task with advance and delete actions.

#[cfg(test)]
#[path = "task_card_test.rs"]
mod task_card_test;

use leptos::prelude::*;

use crate::net::types::{Task, TaskStatus};

pub fn task_status_class(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "task-badge task-badge--default",
        TaskStatus::InProgress => "task-badge task-badge--warning",
        TaskStatus::Completed => "task-badge task-badge--success",
    }
}

/// Completed tasks cycle back to pending, so the button reads "Reset".
pub fn advance_label(status: TaskStatus) -> &'static str {
    if status == TaskStatus::Completed { "Reset" } else { "Next Status" }
}

#[component]
pub fn TaskCard(
    task: Task,
    on_status_change: Callback<(String, TaskStatus)>,
    on_delete: Callback<String>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let next = task.status.next();
    let id_advance = task.id.clone();
    let id_delete = task.id.clone();

    view! {
        <article class="task-card">
            <header class="task-card__header">
                <h3 class="task-card__title">{task.title}</h3>
                <span class=task_status_class(task.status)>{task.status.label()}</span>
            </header>
            <p class="task-card__description">{task.description}</p>
            <div class="task-card__actions">
                <button
                    class="btn btn--primary btn--sm"
                    disabled=move || busy.get()
                    on:click=move |_| on_status_change.run((id_advance.clone(), next))
                >
                    {advance_label(task.status)}
                </button>
                <button
                    class="btn btn--danger btn--sm"
                    disabled=move || busy.get()
                    on:click=move |_| on_delete.run(id_delete.clone())
                >
                    "Delete"
                </button>
            </div>
        </article>
    }
}
