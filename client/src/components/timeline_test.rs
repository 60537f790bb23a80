use super::*;

fn event(key: &str, is_completed: bool, is_current: bool) -> TimelineEvent {
    TimelineEvent {
        key: key.to_owned(),
        label: key.to_owned(),
        timestamp: None,
        description: None,
        is_completed,
        is_current,
    }
}

#[test]
fn node_state_prefers_current_over_completed() {
    assert_eq!(TimelineNodeState::of(&event("a", true, true)), TimelineNodeState::Current);
    assert_eq!(TimelineNodeState::of(&event("a", true, false)), TimelineNodeState::Completed);
    assert_eq!(TimelineNodeState::of(&event("a", false, false)), TimelineNodeState::Upcoming);
}

#[test]
fn connector_follows_completion_and_skips_last_row() {
    let events = vec![event("a", true, false), event("b", false, true), event("c", false, false)];
    assert_eq!(connector_filled(&events, 0), Some(true));
    assert_eq!(connector_filled(&events, 1), Some(false));
    assert_eq!(connector_filled(&events, 2), None);
    assert_eq!(connector_filled(&events, 7), None);
}
