use super::*;

fn task() -> Task {
    Task {
        id: "2".to_owned(),
        title: "Build Task Feature".to_owned(),
        description: "Implement task management functionality".to_owned(),
        status: TaskStatus::InProgress,
        created_at: "2025-11-11T00:00:00.000Z".to_owned(),
        updated_at: "2025-11-11T00:00:00.000Z".to_owned(),
    }
}

#[test]
fn task_serializes_with_camel_case_fields_and_kebab_status() {
    let json = serde_json::to_value(task()).unwrap();
    assert_eq!(json["status"], "in-progress");
    assert_eq!(json["createdAt"], "2025-11-11T00:00:00.000Z");
    assert!(json.get("created_at").is_none());
}

#[test]
fn task_status_cycles_through_all_states() {
    assert_eq!(TaskStatus::Pending.next(), TaskStatus::InProgress);
    assert_eq!(TaskStatus::InProgress.next(), TaskStatus::Completed);
    assert_eq!(TaskStatus::Completed.next(), TaskStatus::Pending);
    for status in TaskStatus::ALL {
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, format!("\"{}\"", status.as_str()));
    }
}

#[test]
fn update_input_omits_absent_fields() {
    let json = serde_json::to_string(&UpdateTaskInput::status(TaskStatus::Completed)).unwrap();
    assert_eq!(json, r#"{"status":"completed"}"#);
    let parsed: UpdateTaskInput = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed, UpdateTaskInput::default());
}

#[test]
fn update_input_rejects_unknown_status() {
    assert!(serde_json::from_str::<UpdateTaskInput>(r#"{"status":"archived"}"#).is_err());
}

#[test]
fn apply_to_changes_only_present_fields() {
    let mut t = task();
    let input = UpdateTaskInput { title: Some("Renamed".to_owned()), ..UpdateTaskInput::default() };
    assert!(input.apply_to(&mut t));
    assert_eq!(t.title, "Renamed");
    assert_eq!(t.status, TaskStatus::InProgress);
    assert!(!UpdateTaskInput::status(TaskStatus::InProgress).apply_to(&mut t));
}
