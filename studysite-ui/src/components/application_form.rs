//! Application Form Component
//!
//! Wraps the embedded form; the header's "Apply Now" scrolls here.

use leptos::*;
use studysite::content::{APPLICATION_FORM, APPLICATION_FORM_ID, FORM_INTRO, FORM_LOADING};

#[component]
pub fn ApplicationForm() -> impl IntoView {
    let form = APPLICATION_FORM;

    view! {
        <section class="form-section" id=APPLICATION_FORM_ID>
            <div class="form-header">
                <h2>"Application Form"</h2>
                <div class="section-divider"></div>
                {FORM_INTRO.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
            </div>

            <div class="form-container">
                <iframe
                    src=form.src
                    width=form.width.to_string()
                    height=form.height.to_string()
                    title=form.title
                    frameborder="0"
                    marginheight="0"
                    marginwidth="0"
                    class="google-form"
                >
                    {FORM_LOADING}
                </iframe>
            </div>
        </section>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_form_markup() {
        let root = document().create_element("div").unwrap();
        document().body().unwrap().append_child(&root).unwrap();
        mount_to(root.clone().unchecked_into(), || view! { <ApplicationForm /> });

        assert!(root.query_selector("section#application-form").unwrap().is_some());

        let intro = root.query_selector_all(".form-header p").unwrap();
        assert_eq!(intro.length(), 2);
        assert_eq!(
            intro.item(0).unwrap().text_content().unwrap(),
            "Should take less than 5 minutes. "
        );

        let iframe = root.query_selector("iframe.google-form").unwrap().unwrap();
        assert_eq!(iframe.get_attribute("height").as_deref(), Some("1609"));
        assert_eq!(iframe.text_content().unwrap(), "Loading application form...");
    }
}
