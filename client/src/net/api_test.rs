use super::*;

#[test]
fn task_endpoint_formats_expected_path() {
    assert_eq!(task_endpoint("42"), "/api/tasks/42");
}

#[test]
fn request_failed_message_prefers_server_error_body() {
    let body = ApiErrorBody { error: "Task not found".to_owned() };
    assert_eq!(request_failed_message("delete task", 404, Some(body)), "Task not found");
}

#[test]
fn request_failed_message_falls_back_to_status() {
    assert_eq!(request_failed_message("fetch tasks", 500, None), "fetch tasks failed: 500");
    let empty = ApiErrorBody { error: String::new() };
    assert_eq!(request_failed_message("update task", 400, Some(empty)), "update task failed: 400");
}
