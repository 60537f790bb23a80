//! Mock task manager page.

use leptos::prelude::*;

use crate::components::main_layout::{MainLayout, crumbs};
use crate::components::task_list::TaskList;

#[component]
pub fn TasksPage() -> impl IntoView {
    view! {
        <MainLayout breadcrumbs=crumbs(&[("Tasks", "/tasks")])>
            <div class="page">
                <div class="page__header">
                    <h1>"Tasks"</h1>
                    <p class="muted">"Demo CRUD backed by the in-memory task service"</p>
                </div>
                <TaskList />
            </div>
        </MainLayout>
    }
}
