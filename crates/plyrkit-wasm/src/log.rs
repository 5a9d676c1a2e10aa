//! Console diagnostics
//!
//! Every failure in the mount lifecycle lands here. Nothing is thrown into
//! the hosting page.

use plyrkit_core::Error;
use wasm_bindgen::JsValue;

/// Report a controller error with its stable code
pub fn report(err: &Error) {
    web_sys::console::error_1(&format!("[plyrkit] {}: {err}", err.error_code()).into());
}

/// Non-fatal diagnostic
pub fn warn(message: &str) {
    web_sys::console::warn_1(&format!("[plyrkit] {message}").into());
}

/// Best-effort description of a JavaScript error value
pub fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
