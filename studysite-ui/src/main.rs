//! Studysite Page
//!
//! Recruitment page for the wearable tech testing study, built with
//! Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It reads the published schedule document over HTTP once on
//! load; every other section is fixed copy from `studysite::content`.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
