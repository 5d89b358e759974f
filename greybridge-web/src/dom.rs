use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// A scheduled callback that is cancelled when the handle drops.
///
/// Handles live in the owning component's state, so pending work dies with
/// the component instead of firing into a torn-down UI.
pub struct TimerHandle {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        window().clear_timeout_with_handle(self.id);
    }
}

/// Run `callback` once after `delay_ms` milliseconds.
///
/// # Errors
/// Returns an error if the browser refuses to schedule the timer.
pub fn schedule(delay_ms: u32, callback: impl FnOnce() + 'static) -> Result<TimerHandle, JsValue> {
    let mut callback = Some(callback);
    let closure = Closure::wrap(Box::new(move || {
        if let Some(callback) = callback.take() {
            callback();
        }
    }) as Box<dyn FnMut()>);

    let id = window().set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        i32::try_from(delay_ms).unwrap_or(i32::MAX),
    )?;
    Ok(TimerHandle {
        id,
        _closure: closure,
    })
}
