//! Overview Carousel Component
//!
//! Autoplaying card slider. Paging rules live in
//! `studysite::content::CarouselSettings`; this component owns the timer,
//! hover pause and viewport width.

use gloo_timers::callback::Interval;
use leptos::*;
use studysite::content::{Card, CarouselSettings, OVERVIEW_CARDS};

/// Width assumed when the window cannot report one
const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

#[component]
pub fn OverviewCarousel() -> impl IntoView {
    let settings = store_value(CarouselSettings::default());
    let count = OVERVIEW_CARDS.len();

    let index = create_rw_signal(0usize);
    let hovered = create_rw_signal(false);
    let width = create_rw_signal(viewport_width());

    let resize = window_event_listener(ev::resize, move |_| width.set(viewport_width()));
    on_cleanup(move || resize.remove());

    let (autoplay, autoplay_ms) = settings.with_value(|s| (s.autoplay, s.autoplay_speed_ms));
    if autoplay {
        let timer = Interval::new(autoplay_ms, move || {
            let paused = settings.with_value(|s| s.pause_on_hover) && hovered.get_untracked();
            if !paused {
                let w = width.get_untracked();
                index.update(|i| *i = settings.with_value(|s| s.advance(*i, count, w)));
            }
        });
        on_cleanup(move || drop(timer));
    }

    let next = move |_| {
        let w = width.get_untracked();
        index.update(|i| *i = settings.with_value(|s| s.advance(*i, count, w)));
    };
    let prev = move |_| {
        let w = width.get_untracked();
        index.update(|i| *i = settings.with_value(|s| s.retreat(*i, count, w)));
    };

    let speed = settings.with_value(|s| s.speed_ms);
    let show_dots = settings.with_value(|s| s.dots);

    view! {
        <div
            class="carousel-container"
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            <div class="carousel-viewport">
                <button class="carousel-arrow carousel-prev" on:click=prev aria-label="Previous">"‹"</button>

                <div class="carousel-track" style=format!("--slide-speed: {}ms", speed)>
                    {move || {
                        let w = width.get();
                        let visible = settings.with_value(|s| s.visible(index.get(), count, w));
                        let basis = 100.0 / visible.len().max(1) as f64;

                        visible.into_iter().map(|i| view! {
                            <div
                                class="carousel-card-wrapper"
                                style=format!("flex: 0 0 {:.4}%", basis)
                            >
                                <OverviewCard card=OVERVIEW_CARDS[i] />
                            </div>
                        }).collect_view()
                    }}
                </div>

                <button class="carousel-arrow carousel-next" on:click=next aria-label="Next">"›"</button>
            </div>

            <Show when=move || show_dots>
                <ul class="carousel-dots">
                    {move || {
                        let positions = settings.with_value(|s| s.positions(count, width.get()));
                        (0..positions).map(|p| view! {
                            <li>
                                <button
                                    class="carousel-dot"
                                    class:active=move || index.get() == p
                                    on:click=move |_| index.set(p)
                                    aria-label=format!("Slide {}", p + 1)
                                />
                            </li>
                        }).collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}

#[component]
fn OverviewCard(card: Card) -> impl IntoView {
    view! {
        <div class="content-card">
            <div class="card-icon">{card.icon}</div>
            <h3>{card.title}</h3>
            <p>{card.body}</p>
        </div>
    }
}

fn viewport_width() -> u32 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .map(|w| w as u32)
        .unwrap_or(DEFAULT_VIEWPORT_WIDTH)
}
