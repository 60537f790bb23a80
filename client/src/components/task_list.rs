//! Mock task list: create form plus one card per task.
//!
//! SYSTEM CONTEXT
//! ==============
//! Talks to `/api/tasks` through `net::api` and folds responses into the
//! shared `RwSignal<TasksState>`. The list loads once after hydration; SSR
//! renders the loading state.

#[cfg(test)]
#[path = "task_list_test.rs"]
mod task_list_test;

use leptos::prelude::*;

use crate::components::task_card::TaskCard;
use crate::net::types::{CreateTaskInput, TaskStatus};
use crate::state::tasks::TasksState;

/// Trimmed create input, `None` until a title is present.
pub fn create_input(title: &str, description: &str) -> Option<CreateTaskInput> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    Some(CreateTaskInput { title: title.to_owned(), description: description.trim().to_owned() })
}

#[component]
pub fn TaskList() -> impl IntoView {
    let tasks = expect_context::<RwSignal<TasksState>>();
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        tasks.update(TasksState::begin_load);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_tasks().await {
                Ok(items) => tasks.update(|s| s.loaded(items)),
                Err(e) => {
                    log::warn!("task list load failed: {e}");
                    tasks.update(|s| s.set_error(e));
                }
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(input) = create_input(&title.get(), &description.get()) else {
            return;
        };
        tasks.update(|s| s.begin_request(None));
        title.set(String::new());
        description.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_task(&input).await {
                Ok(task) => tasks.update(|s| s.apply_created(task)),
                Err(e) => tasks.update(|s| s.set_error(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = input;
    };

    let on_status_change = Callback::new(move |(id, status): (String, TaskStatus)| {
        tasks.update(|s| s.begin_request(Some(&id)));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let input = crate::net::types::UpdateTaskInput::status(status);
            match crate::net::api::update_task(&id, &input).await {
                Ok(task) => tasks.update(|s| s.apply_updated(task)),
                Err(e) => tasks.update(|s| s.request_failed(&id, e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = status;
    });

    let on_delete = Callback::new(move |id: String| {
        tasks.update(|s| s.begin_request(Some(&id)));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_task(&id).await {
                Ok(()) => tasks.update(|s| s.apply_deleted(&id)),
                Err(e) => tasks.update(|s| s.request_failed(&id, e)),
            }
        });
    });

    view! {
        <div class="task-list">
            <form class="task-form" on:submit=on_submit>
                <input
                    class="input"
                    type="text"
                    placeholder="Task title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <textarea
                    class="input"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit" disabled=move || title.get().trim().is_empty()>
                    "Add Task"
                </button>
            </form>

            <Show when=move || tasks.get().error.is_some()>
                <div class="task-list__error">"Error: " {move || tasks.get().error.unwrap_or_default()}</div>
            </Show>

            <Show
                when=move || !tasks.get().loading
                fallback=|| view! { <div class="task-list__loading">"Loading tasks..."</div> }
            >
                <h2 class="task-list__heading">{move || format!("Your Tasks ({})", tasks.get().items.len())}</h2>
                <Show
                    when=move || !tasks.get().items.is_empty()
                    fallback=|| view! { <div class="task-list__empty">"No tasks yet. Create your first task above!"</div> }
                >
                    <div class="task-list__grid">
                        <For
                            each=move || tasks.get().items
                            key=|t| (t.id.clone(), t.status, t.updated_at.clone())
                            children=move |task| {
                                let id = task.id.clone();
                                let busy = Signal::derive(move || tasks.with(|s| s.is_pending(&id)));
                                view! { <TaskCard task=task on_status_change=on_status_change on_delete=on_delete busy=busy /> }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
