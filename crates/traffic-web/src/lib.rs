mod api;
mod app;
mod components;
mod pages;

// Axum side of the prediction endpoint; only built for the server binary.
#[cfg(feature = "ssr")]
pub mod server;

pub use app::App;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
