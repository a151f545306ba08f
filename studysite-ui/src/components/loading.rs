//! Loading Component

use leptos::*;

/// Spinner with a caption
#[component]
pub fn Loading(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="loading-container">
            <div class="loading-spinner" />
            <p>{message}</p>
        </div>
    }
}
