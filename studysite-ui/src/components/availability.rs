//! Availability Components
//!
//! The three-state availability section and the per-week table.

use leptos::*;
use studysite::schedule::{error_banner, AvailabilityTable, AvailabilityTier, ScheduleState};

use crate::components::Loading;
use crate::state::page::use_page_state;

/// Loading spinner, error banner with retry, or legend plus tables
#[component]
pub fn AvailabilitySection() -> impl IntoView {
    let state = use_page_state();
    let last_update = state.last_update();

    move || match state.schedule.get() {
        ScheduleState::Loading => view! {
            <Loading message="Loading availability data..." />
        }.into_view(),

        ScheduleState::Failed(message) => view! {
            <div class="error-container">
                <div class="error-icon">"⚠️"</div>
                <p>{error_banner(&message)}</p>
                <button class="btn-secondary" on:click=move |_| reload_page()>"Retry"</button>
            </div>
        }.into_view(),

        ScheduleState::Loaded(doc) => {
            let tables = doc
                .weeks()
                .filter_map(|(title, week)| {
                    AvailabilityTable::from_week(week).map(|table| view! {
                        <AvailabilityTableView title=title table=table last_update=last_update />
                    })
                })
                .collect_view();

            view! {
                <div class="availability-section">
                    <Legend />
                    <div class="tables-container">{tables}</div>
                </div>
            }.into_view()
        }
    }
}

#[component]
fn Legend() -> impl IntoView {
    view! {
        <div class="availability-legend">
            {AvailabilityTier::ALL.iter().map(|tier| view! {
                <div class="legend-item">
                    <span class=format!("legend-color {}", tier.css_class())></span>
                    <span>{tier.label()}</span>
                </div>
            }).collect_view()}
        </div>
    }
}

/// One week's grid
#[component]
pub fn AvailabilityTableView(
    /// "Week 1" or "Week 2"
    title: &'static str,
    table: AvailabilityTable,
    #[prop(into)]
    last_update: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="availability-table-container" data-week=title>
            <div class="table-header">
                <h3>"NYC Facility"</h3>
                <p class="last-update">"Last update: " {move || last_update.get()}</p>
            </div>

            <div class="table-wrapper">
                <table class="availability-table">
                    <thead>
                        <tr>
                            <th class="time-column">"Time"</th>
                            {table.columns.into_iter().map(|column| view! {
                                <th class="date-column">
                                    <div class="date-header">
                                        <div class="day-name">{column.day_name}</div>
                                        <div class="date-value">{column.date}</div>
                                    </div>
                                </th>
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {table.rows.into_iter().map(|row| view! {
                            <tr>
                                <td class="time-cell">{row.label}</td>
                                {row.cells.into_iter().map(|cell| view! {
                                    <td class=cell.class()>{cell.text}</td>
                                }).collect_view()}
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn reload_page() {
    if let Err(e) = window().location().reload() {
        web_sys::console::error_1(&e);
    }
}
