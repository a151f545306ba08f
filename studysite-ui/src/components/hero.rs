//! Hero Component
//!
//! Study badge, headline and the four figures.

use leptos::*;
use studysite::content::{
    EARLIEST_DATE_LABEL, HERO_BADGE, HERO_BADGE_LOCATION, HERO_SUBTITLE, HERO_TITLE,
    PARTICIPANTS_LABEL, PAYMENT, PAYMENT_LABEL, TIME_COMMITMENT, TIME_COMMITMENT_LABEL,
};

use crate::state::page::use_page_state;

#[component]
pub fn Hero() -> impl IntoView {
    let state = use_page_state();
    let participants = state.total_participants();
    let earliest = state.earliest_date();

    view! {
        <div class="hero-section">
            <div class="container">
                <div class="hero-content">
                    <div class="project-badge">
                        <span class="badge-text">{HERO_BADGE}</span>
                        <span class="badge-location">{HERO_BADGE_LOCATION}</span>
                    </div>
                    <h1 class="hero-title">{HERO_TITLE}</h1>
                    <p class="hero-subtitle">{HERO_SUBTITLE}</p>

                    <div class="hero-stats">
                        <StatCard value=PAYMENT label=PAYMENT_LABEL />
                        <StatCard value=participants label=PARTICIPANTS_LABEL />
                        <StatCard value=TIME_COMMITMENT label=TIME_COMMITMENT_LABEL />
                        <StatCard value=earliest label=EARLIEST_DATE_LABEL />
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn StatCard(
    #[prop(into)]
    value: MaybeSignal<String>,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-number">{move || value.get()}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}
