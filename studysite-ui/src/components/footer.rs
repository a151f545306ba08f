//! Footer Component

use leptos::*;
use studysite::content::{FOOTER_DISCLAIMER, SOCIAL_LINKS, SUPPORT_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="modern-footer">
            <div class="container">
                <div class="footer-content">
                    <div class="footer-brand">
                        <span class="logo-text">"uTest"</span>
                        <p class="footer-disclaimer">{FOOTER_DISCLAIMER}</p>
                    </div>

                    <div class="footer-links">
                        <h4>"Support"</h4>
                        <ul>
                            {SUPPORT_LINKS.iter().map(|link| view! {
                                <li><a href=link.href>{link.label}</a></li>
                            }).collect_view()}
                        </ul>
                    </div>

                    <div class="footer-social">
                        <h4>"Follow Us"</h4>
                        <div class="social-icons">
                            {SOCIAL_LINKS.iter().map(|social| view! {
                                <a href=social.href target="_blank" rel="noopener noreferrer">
                                    <img src=social.icon alt=social.alt />
                                </a>
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}
