pub mod app;
pub mod domain;
pub mod routes;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[wasm_bindgen]
pub fn hydrate() {
    // browser console logging through the `log` facade
    _ = console_log::init_with_level(log_level());
    console_error_panic_hook::set_once();

    log::info!("iCastar profile frontend starting");
    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
