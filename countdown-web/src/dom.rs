use js_sys::{Function, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlInputElement, Storage, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Best-effort text for a thrown JS value: the string itself, an `Error`'s
/// message, or its debug form.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{value:?}"),
    }
}

/// Write straight to `console.error`, bypassing the `log` facade.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Ask the browser to open the native picker for `input`.
///
/// Browsers without `showPicker` (or that refuse it outside a user gesture)
/// get the input focused instead.
pub fn show_picker(input: &HtmlInputElement) {
    let shown = Reflect::get(input, &JsValue::from_str("showPicker"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .map(|f| f.call0(input));
    match shown {
        Some(Ok(_)) => {}
        Some(Err(err)) => {
            log::debug!("showPicker rejected: {}", js_error_message(&err));
            let _ = input.focus();
        }
        None => {
            let _ = input.focus();
        }
    }
}
