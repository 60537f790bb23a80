use super::*;

fn task(id: &str, status: TaskStatus) -> Task {
    Task {
        id: id.to_owned(),
        title: format!("task {id}"),
        description: String::new(),
        status,
        created_at: "2025-11-10T00:00:00.000Z".to_owned(),
        updated_at: "2025-11-10T00:00:00.000Z".to_owned(),
    }
}

#[test]
fn default_state_is_loading() {
    let state = TasksState::default();
    assert!(state.loading);
    assert!(state.items.is_empty());
}

#[test]
fn loaded_replaces_items_and_clears_loading() {
    let mut state = TasksState::default();
    state.loaded(vec![task("1", TaskStatus::Completed), task("2", TaskStatus::Pending)]);
    assert!(!state.loading);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.count_with(TaskStatus::Pending), 1);
}

#[test]
fn created_tasks_append_in_order() {
    let mut state = TasksState::default();
    state.loaded(vec![task("1", TaskStatus::Pending)]);
    state.begin_request(None);
    state.apply_created(task("9", TaskStatus::Pending));
    let ids: Vec<&str> = state.items.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "9"]);
}

#[test]
fn updated_replaces_matching_task_only() {
    let mut state = TasksState::default();
    state.loaded(vec![task("1", TaskStatus::Pending), task("2", TaskStatus::Pending)]);
    state.begin_request(Some("2"));
    state.apply_updated(task("2", TaskStatus::InProgress));
    assert_eq!(state.items[1].status, TaskStatus::InProgress);
    assert_eq!(state.items[0].status, TaskStatus::Pending);
    assert!(!state.is_pending("2"));

    state.apply_updated(task("77", TaskStatus::Completed));
    assert_eq!(state.items.len(), 2);
}

#[test]
fn deleted_removes_task() {
    let mut state = TasksState::default();
    state.loaded(vec![task("1", TaskStatus::Pending), task("2", TaskStatus::Pending)]);
    state.apply_deleted("1");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "2");
}

#[test]
fn error_keeps_items_and_records_message() {
    let mut state = TasksState::default();
    state.loaded(vec![task("1", TaskStatus::Pending)]);
    state.begin_request(Some("1"));
    state.request_failed("1", "Task not found".to_owned());
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("Task not found"));
    assert!(state.pending.is_empty());

    state.begin_load();
    assert_eq!(state.error, None);
}

#[test]
fn overlapping_requests_stay_pending_until_each_answers() {
    let mut state = TasksState::default();
    state.loaded(vec![task("a", TaskStatus::Pending), task("b", TaskStatus::Pending)]);
    state.begin_request(Some("a"));
    state.begin_request(Some("b"));

    state.apply_updated(task("a", TaskStatus::Completed));
    assert!(!state.is_pending("a"));
    assert!(state.is_pending("b"));

    state.apply_deleted("b");
    assert!(state.pending.is_empty());
}

#[test]
fn failed_request_releases_only_its_own_task() {
    let mut state = TasksState::default();
    state.loaded(vec![task("a", TaskStatus::Pending), task("b", TaskStatus::Pending)]);
    state.begin_request(Some("a"));
    state.begin_request(Some("b"));

    state.request_failed("a", "Task not found".to_owned());
    assert!(!state.is_pending("a"));
    assert!(state.is_pending("b"));
}

#[test]
fn create_does_not_lock_existing_cards() {
    let mut state = TasksState::default();
    state.loaded(vec![task("a", TaskStatus::Pending)]);
    state.begin_request(Some("a"));
    state.begin_request(None);
    state.apply_created(task("n", TaskStatus::Pending));
    assert!(state.is_pending("a"));
    assert!(!state.is_pending("n"));
}
