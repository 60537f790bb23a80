use super::*;

fn entry(status: VerificationStatus, timestamp: &str, completed_by: Option<&str>) -> VerificationTimeline {
    VerificationTimeline {
        status,
        timestamp: timestamp.to_owned(),
        description: format!("{} step", status.as_str()),
        completed_by: completed_by.map(str::to_owned),
        notes: None,
    }
}

fn pipeline() -> Vec<VerificationTimeline> {
    vec![
        entry(VerificationStatus::Submitted, "2024-11-18 10:30 AM", Some("System")),
        entry(VerificationStatus::InTransit, "2024-11-18 02:15 PM", Some("Swift Logistics")),
        entry(VerificationStatus::AtPawnshop, "2024-11-19 09:00 AM", None),
        entry(VerificationStatus::Verifying, "2024-11-19 11:45 AM", None),
        entry(VerificationStatus::Appraising, "", None),
        entry(VerificationStatus::Approved, "", None),
    ]
}

fn flags(events: &[TimelineEvent]) -> Vec<(bool, bool)> {
    events.iter().map(|e| (e.is_completed, e.is_current)).collect()
}

#[test]
fn verifying_marks_earlier_steps_completed() {
    let events = build_timeline(&pipeline(), VerificationStatus::Verifying);
    assert_eq!(
        flags(&events),
        vec![(true, false), (true, false), (true, false), (false, true), (false, false), (false, false)]
    );
}

#[test]
fn tokenized_completes_every_entry_without_a_current_row() {
    let events = build_timeline(&pipeline(), VerificationStatus::Tokenized);
    assert!(events.iter().all(|e| e.is_completed && !e.is_current));
}

#[test]
fn statuses_outside_the_pipeline_mark_nothing() {
    for status in [VerificationStatus::Rejected, VerificationStatus::Draft] {
        let events = build_timeline(&pipeline(), status);
        assert!(events.iter().all(|e| !e.is_completed && !e.is_current), "{status:?}");
    }
}

#[test]
fn flags_do_not_depend_on_entry_order() {
    let mut reversed = pipeline();
    reversed.reverse();
    let events = build_timeline(&reversed, VerificationStatus::AtPawnshop);
    let current: Vec<&str> = events.iter().filter(|e| e.is_current).map(|e| e.key.as_str()).collect();
    assert_eq!(current, vec!["at-pawnshop"]);
    assert_eq!(events.iter().filter(|e| e.is_completed).count(), 2);
}

#[test]
fn pending_entries_have_no_timestamp_and_attribution_is_prefixed() {
    let events = build_timeline(&pipeline(), VerificationStatus::Verifying);
    assert_eq!(events[0].description.as_deref(), Some("Completed by: System"));
    assert_eq!(events[2].description, None);
    assert_eq!(events[4].timestamp, None);
    assert_eq!(events[0].timestamp.as_deref(), Some("2024-11-18 10:30 AM"));
}
