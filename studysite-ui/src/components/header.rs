//! Header Component
//!
//! Brand, section anchors and the two call-to-action buttons.

use leptos::*;
use studysite::content::{APPLICATION_FORM_ID, LEARN_MORE_URL, NAV_LINKS};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

#[component]
pub fn Header() -> impl IntoView {
    let learn_more = move |_| {
        if let Err(e) = window().open_with_url_and_target(LEARN_MORE_URL, "_blank") {
            web_sys::console::error_1(&e);
        }
    };

    view! {
        <header class="modern-header">
            <div class="header-container">
                <div class="header-brand">
                    <div class="logo-placeholder">
                        <span class="logo-text">"uTest"</span>
                    </div>
                </div>

                <nav class="header-nav">
                    <ul>
                        {NAV_LINKS.iter().map(|link| view! {
                            <li><a href=link.href>{link.label}</a></li>
                        }).collect_view()}
                    </ul>
                </nav>

                <div class="header-actions">
                    <button class="btn-secondary" on:click=learn_more>"Learn More"</button>
                    <button class="btn-primary" on:click=move |_| scroll_to_form()>"Apply Now"</button>
                </div>
            </div>
        </header>
    }
}

/// Smooth-scroll to the application form, if it is on the page
fn scroll_to_form() {
    if let Some(form) = document().get_element_by_id(APPLICATION_FORM_ID) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        form.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
