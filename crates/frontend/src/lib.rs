pub mod app;
pub mod domain;
pub mod exports;
pub mod layout;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

use shared::dom;

fn mount() {
    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // page elements must exist before the widget looks them up
    match dom::document() {
        Some(document) if dom::is_loading() => dom::on_event(&document, "DOMContentLoaded", mount),
        _ => mount(),
    }
}
