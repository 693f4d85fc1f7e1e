use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// A `setInterval` registration. Dropping it cancels the timer and frees
/// the callback.
pub struct Interval {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    /// Call `callback` every `period_ms` milliseconds until dropped.
    ///
    /// # Errors
    /// Returns an error if there is no browser window, the period does not fit
    /// the browser's timer range, or the timer cannot be scheduled.
    pub fn new<F>(period_ms: u32, callback: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let window =
            crate::dom::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
        let timeout = i32::try_from(period_ms)
            .map_err(|_| JsValue::from_str("interval period out of range"))?;
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            timeout,
        )?;
        Ok(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(win) = crate::dom::window() {
            win.clear_interval_with_handle(self.id);
        }
    }
}
