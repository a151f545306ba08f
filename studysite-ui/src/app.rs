//! App Root Component
//!
//! Page layout plus the two mount-time effects: the clock tick and the
//! schedule fetch.

use chrono::Local;
use gloo_timers::callback::Interval;
use leptos::*;
use studysite::schedule::ScheduleState;

use crate::api;
use crate::components::{
    ApplicationForm, AvailabilitySection, Footer, Header, Hero, InfoCards, OverviewCarousel,
    Requirements,
};
use crate::state::provide_page_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_page_state();

    // Live clock; the interval is dropped (cancelled) on unmount
    let clock = Interval::new(1_000, move || state.now.set(Local::now()));
    on_cleanup(move || drop(clock));

    // One fetch per page load. Not cancelled if the page goes away first.
    create_effect(move |_| {
        spawn_local(async move {
            let result = api::fetch_schedule().await;

            if let Err(e) = &result {
                web_sys::console::error_1(
                    &format!("Error fetching schedule data: {}", e).into(),
                );
            }

            state.schedule.set(ScheduleState::from_result(result));
        });
    });

    view! {
        <div class="App">
            <Header />

            <main class="main-content">
                <Hero />

                <div class="container">
                    <section class="content-section" id="overview">
                        <SectionHeader title="Project Overview" />
                        <OverviewCarousel />
                    </section>

                    <section class="content-section" id="availability">
                        <SectionHeader title="Current Availability" />
                        <AvailabilitySection />
                    </section>

                    <section class="content-section" id="requirements">
                        <SectionHeader title="Participant Requirements" />
                        <Requirements />
                    </section>

                    <section class="content-section" id="details">
                        <SectionHeader title="Important Information" />
                        <InfoCards />
                    </section>

                    <ApplicationForm />
                </div>
            </main>

            <Footer />
        </div>
    }
}

/// Section title with divider
#[component]
pub fn SectionHeader(title: &'static str) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2>{title}</h2>
            <div class="section-divider"></div>
        </div>
    }
}
