#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod dom;
pub mod i18n;
pub mod interval;
pub mod logging;
pub mod storage;

pub use components::countdown::{CountdownHandle, CountdownWidget};
pub use storage::{BrowserStorage, StorageBackend};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
    if let Err(err) = app::mount() {
        dom::console_error(&format!("Countdown failed to start: {err:#}"));
    }
}
