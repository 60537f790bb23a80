//! Horizontal step indicator used by the registration wizard.

#[cfg(test)]
#[path = "progress_indicator_test.rs"]
mod progress_indicator_test;

use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressStep {
    pub label: String,
    pub description: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepState {
    Completed,
    Current,
    Upcoming,
}

/// Positional state of step `index` when `current` is active.
pub fn step_state(index: usize, current: usize) -> StepState {
    match index.cmp(&current) {
        std::cmp::Ordering::Less => StepState::Completed,
        std::cmp::Ordering::Equal => StepState::Current,
        std::cmp::Ordering::Greater => StepState::Upcoming,
    }
}

fn circle_class(state: StepState) -> &'static str {
    match state {
        StepState::Completed => "progress__circle progress__circle--completed",
        StepState::Current => "progress__circle progress__circle--current",
        StepState::Upcoming => "progress__circle progress__circle--upcoming",
    }
}

#[component]
pub fn ProgressIndicator(
    steps: Vec<ProgressStep>,
    #[prop(into)] current: Signal<usize>,
) -> impl IntoView {
    let count = steps.len();
    let items = steps
        .into_iter()
        .enumerate()
        .map(|(index, step)| {
            let state = move || step_state(index, current.get());
            view! {
                <div class="progress__step">
                    <div class=move || circle_class(state())>
                        {move || match state() {
                            StepState::Completed => "✓".to_owned(),
                            _ => (index + 1).to_string(),
                        }}
                    </div>
                    <div class="progress__text">
                        <p class="progress__label" class:progress__label--upcoming=move || state() == StepState::Upcoming>
                            {step.label}
                        </p>
                        {step.description.map(|d| view! { <p class="progress__description">{d}</p> })}
                    </div>
                    {(index + 1 < count).then(|| view! {
                        <div class="progress__connector" class:progress__connector--filled=move || state() == StepState::Completed></div>
                    })}
                </div>
            }
        })
        .collect_view();

    view! { <div class="progress">{items}</div> }
}
