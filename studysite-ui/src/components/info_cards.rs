//! Important Information Component
//!
//! Eligibility, documentation and referral cards.

use leptos::*;
use studysite::content::{Span, INFO_CARDS};

#[component]
pub fn InfoCards() -> impl IntoView {
    view! {
        <div class="info-cards">
            {INFO_CARDS.iter().map(|card| view! {
                <div class=format!("info-card {}-card", card.kind)>
                    <div class=format!("{}-header", card.kind)>
                        <span class=format!("{}-icon", card.kind)>{card.icon}</span>
                        <h3>{card.title}</h3>
                    </div>
                    <p>{card.body.iter().map(render_span).collect_view()}</p>
                </div>
            }).collect_view()}
        </div>
    }
}

fn render_span(span: &Span) -> View {
    if span.strong {
        view! { <strong>{span.text}</strong> }.into_view()
    } else {
        span.text.into_view()
    }
}
