//! Requirements Component

use leptos::*;
use studysite::content::REQUIREMENTS;

#[component]
pub fn Requirements() -> impl IntoView {
    view! {
        <div class="requirements-grid">
            {REQUIREMENTS.iter().map(|category| view! {
                <div class="requirement-category">
                    <div class="category-icon">{category.icon}</div>
                    <h3>{category.title}</h3>
                    <ul class="requirement-list">
                        {category.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                    </ul>
                </div>
            }).collect_view()}
        </div>
    }
}
