use search_sync_app::App;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    // search-sync logs through tracing
    tracing_wasm::set_as_global_default();

    log::info!("csr mode - mounting");

    leptos::mount::mount_to_body(App);
}
