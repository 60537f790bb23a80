//! Vertical timeline of caller-flagged events.
//!
//! The component never decides which events are done; callers derive
//! `is_completed` / `is_current` (see `state::verification`).

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelineEvent {
    /// Stable key for the row, usually the status wire string.
    pub key: String,
    pub label: String,
    pub timestamp: Option<String>,
    pub description: Option<String>,
    pub is_completed: bool,
    pub is_current: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineNodeState {
    Completed,
    Current,
    Upcoming,
}

impl TimelineNodeState {
    pub fn of(event: &TimelineEvent) -> Self {
        if event.is_current {
            Self::Current
        } else if event.is_completed {
            Self::Completed
        } else {
            Self::Upcoming
        }
    }

    pub const fn class(self) -> &'static str {
        match self {
            Self::Completed => "timeline__node timeline__node--completed",
            Self::Current => "timeline__node timeline__node--current",
            Self::Upcoming => "timeline__node timeline__node--upcoming",
        }
    }
}

/// Connector below an event is filled once the event is done. The last row
/// has no connector.
pub fn connector_filled(events: &[TimelineEvent], index: usize) -> Option<bool> {
    if index + 1 >= events.len() {
        return None;
    }
    events.get(index).map(|e| e.is_completed)
}

#[component]
pub fn Timeline(events: Vec<TimelineEvent>, #[prop(optional, into)] class: String) -> impl IntoView {
    let rows = events
        .iter()
        .enumerate()
        .map(|(index, event)| {
            let state = TimelineNodeState::of(event);
            let connector = connector_filled(&events, index);
            let event = event.clone();
            view! {
                <div class="timeline__row" data-key=event.key>
                    {connector.map(|filled| {
                        view! { <div class="timeline__line" class:timeline__line--filled=filled></div> }
                    })}
                    <div class=state.class()>
                        {if state == TimelineNodeState::Completed { "✓" } else { "•" }}
                    </div>
                    <div class="timeline__body">
                        <p class="timeline__label" class:timeline__label--upcoming=state == TimelineNodeState::Upcoming>
                            {event.label}
                        </p>
                        {event.timestamp.filter(|t| !t.is_empty()).map(|t| view! { <p class="timeline__time">{t}</p> })}
                        {event.description.map(|d| view! { <p class="timeline__description">{d}</p> })}
                    </div>
                </div>
            }
        })
        .collect_view();

    view! { <div class=format!("timeline {class}")>{rows}</div> }
}
