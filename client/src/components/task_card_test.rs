use super::*;

#[test]
fn advance_label_reads_reset_for_completed_tasks() {
    assert_eq!(advance_label(TaskStatus::Completed), "Reset");
    assert_eq!(advance_label(TaskStatus::Pending), "Next Status");
    assert_eq!(advance_label(TaskStatus::InProgress), "Next Status");
}

#[test]
fn status_classes_are_distinct() {
    let classes: Vec<&str> = TaskStatus::ALL.into_iter().map(task_status_class).collect();
    assert_eq!(classes.len(), 3);
    assert!(classes.windows(2).all(|w| w[0] != w[1]));
}
