//! Plyr widget bindings
//!
//! The widget library is not linked at compile time: it is resolved at
//! runtime, either through a caller-injected loader or by dynamically
//! importing the bundled module. The bindings below describe the handful of
//! surface the controller touches on a constructed instance.

use js_sys::{Array, Function, Promise, Reflect};
use plyrkit_core::{Error, KeyboardConfig, Result, WidgetOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;

use crate::log;

/// Module path the default loader imports the widget from
pub const WIDGET_MODULE_PATH: &str = "/library/plyr/plyr.min.js";

#[wasm_bindgen]
extern "C" {
    /// A constructed Plyr instance
    pub type PlyrHandle;

    /// One-time event subscription on the widget
    #[wasm_bindgen(method)]
    pub fn once(this: &PlyrHandle, event: &str, callback: &Function);

    /// Start playback
    #[wasm_bindgen(method)]
    pub fn play(this: &PlyrHandle);

    /// Destroy the instance, restoring the bare media element
    #[wasm_bindgen(method)]
    pub fn destroy(this: &PlyrHandle);

    /// Set the current playback rate
    #[wasm_bindgen(method, setter)]
    pub fn set_speed(this: &PlyrHandle, rate: f64);

    /// The widget's live configuration object
    #[wasm_bindgen(method, getter)]
    pub fn config(this: &PlyrHandle) -> JsValue;
}

#[wasm_bindgen(
    inline_js = "export function plyrkitImport(path) { return import(path).then((m) => m.default || m); }"
)]
extern "C" {
    #[wasm_bindgen(js_name = plyrkitImport)]
    fn plyrkit_import(path: &str) -> Promise;
}

/// Resolve the widget constructor, awaiting the library load
///
/// This is the mount lifecycle's single suspension point. A loader, when
/// injected, receives the module path and must return a promise resolving
/// to the constructor.
pub async fn resolve_constructor(loader: Option<&Function>, path: &str) -> Result<Function> {
    let promise: Promise = match loader {
        Some(loader) => loader
            .call1(&JsValue::NULL, &JsValue::from_str(path))
            .map_err(|e| Error::WidgetUnavailable(log::describe(&e)))?
            .dyn_into()
            .map_err(|_| Error::WidgetUnavailable("loader did not return a promise".to_string()))?,
        None => plyrkit_import(path),
    };

    let module = JsFuture::from(promise)
        .await
        .map_err(|e| Error::WidgetUnavailable(log::describe(&e)))?;

    module
        .dyn_into::<Function>()
        .map_err(|_| Error::WidgetUnavailable("module did not export a constructor".to_string()))
}

/// Construct the widget over the video element
pub fn construct(
    constructor: &Function,
    element: &HtmlVideoElement,
    options: &WidgetOptions,
) -> Result<PlyrHandle> {
    let options_js = serde_wasm_bindgen::to_value(options)
        .map_err(|e| Error::WidgetUnavailable(e.to_string()))?;
    let args = Array::of2(element.as_ref(), &options_js);
    let instance = Reflect::construct(constructor, &args)
        .map_err(|e| Error::WidgetUnavailable(log::describe(&e)))?;
    Ok(instance.unchecked_into())
}

/// Disable the widget's keyboard shortcut handling in place
///
/// Writes `{focused: false, global: false}` over `config.keyboard`, which
/// covers both the element-focus-scoped and the page-global shortcuts.
pub fn disable_keyboard(handle: &PlyrHandle) -> Result<()> {
    let keyboard = serde_wasm_bindgen::to_value(&KeyboardConfig::disabled())
        .map_err(|e| Error::Dom(e.to_string()))?;
    Reflect::set(&handle.config(), &JsValue::from_str("keyboard"), &keyboard)
        .map_err(|e| Error::Dom(log::describe(&e)))?;
    Ok(())
}
