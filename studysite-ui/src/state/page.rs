//! Page State
//!
//! Reactive state shared by every section, using Leptos signals.

use chrono::{DateTime, Local};
use leptos::*;
use studysite::schedule::{earliest_date_label, ScheduleState};
use studysite::total_participants_label;

/// State provided to all components
#[derive(Clone, Copy)]
pub struct PageState {
    /// Schedule fetch lifecycle
    pub schedule: RwSignal<ScheduleState>,
    /// Wall clock, refreshed every second while the page is mounted
    pub now: RwSignal<DateTime<Local>>,
}

/// Provide page state to the component tree
pub fn provide_page_state() -> PageState {
    let state = PageState {
        schedule: create_rw_signal(ScheduleState::Loading),
        now: create_rw_signal(Local::now()),
    };

    provide_context(state);
    state
}

/// Get the page state from context
pub fn use_page_state() -> PageState {
    use_context::<PageState>().expect("PageState not found")
}

impl PageState {
    /// Hero "Earliest Date" figure
    pub fn earliest_date(&self) -> Memo<String> {
        let schedule = self.schedule;
        create_memo(move |_| schedule.with(|s| earliest_date_label(s.document())))
    }

    /// Hero "Participants Till Date" figure; recomputed only when the
    /// calendar day changes
    pub fn total_participants(&self) -> Memo<String> {
        let now = self.now;
        let today = create_memo(move |_| now.get().date_naive());
        create_memo(move |_| total_participants_label(today.get()))
    }

    /// Label next to each availability table
    pub fn last_update(&self) -> Signal<String> {
        let schedule = self.schedule;
        let now = self.now;
        Signal::derive(move || {
            schedule.with(|s| {
                s.document()
                    .map(|doc| doc.last_update_label(&now.get()))
                    .unwrap_or_default()
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use studysite::schedule::parse_document;

    fn state_at(y: i32, m: u32, d: u32) -> PageState {
        PageState {
            schedule: create_rw_signal(ScheduleState::Loading),
            now: create_rw_signal(Local.with_ymd_and_hms(y, m, d, 15, 0, 0).unwrap()),
        }
    }

    fn loaded(json: &str) -> ScheduleState {
        ScheduleState::Loaded(parse_document(json).unwrap())
    }

    #[test]
    fn test_earliest_date_follows_schedule() {
        let runtime = create_runtime();
        let state = state_at(2025, 6, 4);
        let earliest = state.earliest_date();

        assert_eq!(earliest.get(), "Jun 6");

        state.schedule.set(loaded(
            r#"{"Week1": {"dates": ["2025-06-02", "2025-06-03"], "slots": {"9:00": [null, 45]}}}"#,
        ));
        assert_eq!(earliest.get(), "Jun 3");

        state
            .schedule
            .set(ScheduleState::Failed("HTTP error! status: 500".to_string()));
        assert_eq!(earliest.get(), "Jun 6");

        runtime.dispose();
    }

    #[test]
    fn test_total_participants_follows_clock() {
        let runtime = create_runtime();
        let state = state_at(2024, 8, 1);
        let total = state.total_participants();

        assert_eq!(total.get(), "2");

        state
            .now
            .set(Local.with_ymd_and_hms(2024, 8, 6, 9, 30, 0).unwrap());
        assert_eq!(total.get(), "30");

        runtime.dispose();
    }

    #[test]
    fn test_last_update_label() {
        let runtime = create_runtime();
        let state = state_at(2025, 6, 4);
        let last_update = state.last_update();

        assert_eq!(last_update.get(), "");

        state.schedule.set(loaded(r#"{"Week1": {"dates": [], "slots": {}}}"#));
        assert_eq!(last_update.get(), "6/4/2025 1:48 pm NY time");

        state.schedule.set(loaded(r#"{"lastUpdate": "6/3/2025 8:00 am NY time"}"#));
        assert_eq!(last_update.get(), "6/3/2025 8:00 am NY time");

        runtime.dispose();
    }
}
