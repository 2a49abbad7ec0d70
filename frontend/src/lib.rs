pub mod app;

/// Mounts the masonry demo page, logs of the scroll trigger are sent to the browser console
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    _ = console_log::init_with_level(log::Level::Info);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}
