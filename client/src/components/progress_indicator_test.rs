use super::*;

#[test]
fn step_states_are_positional() {
    let states: Vec<StepState> = (0..3).map(|i| step_state(i, 1)).collect();
    assert_eq!(states, vec![StepState::Completed, StepState::Current, StepState::Upcoming]);
}

#[test]
fn first_step_has_nothing_completed() {
    assert_eq!(step_state(0, 0), StepState::Current);
    assert_eq!(step_state(2, 0), StepState::Upcoming);
}

#[test]
fn cursor_past_end_marks_everything_completed() {
    assert!((0..3).all(|i| step_state(i, 3) == StepState::Completed));
}
