//! Plyrkit WASM - browser layer for mounting a Plyr player
//!
//! Wraps a page `<video>` element with the Plyr widget:
//! - Locates the element and attaches the media source
//! - Lazily loads the widget library (injected loader or dynamic import)
//! - Applies control bar layout, playback speed, and interaction lockout
//! - Exposes a play trigger and an end-of-playback callback hook
//!
//! ## Integration
//!
//! ```javascript
//! import init, { PlayerController } from '@plyrkit/wasm';
//!
//! await init();
//! const controller = new PlayerController();
//! await controller.initialize('player1', '/media/clip.mp4', onEnded, null, null, true);
//! controller.play();
//! ```

use wasm_bindgen::prelude::*;

mod controller;
mod lockout;
mod log;
mod widget;

pub use controller::PlayerController;
pub use widget::{PlyrHandle, WIDGET_MODULE_PATH};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"[Plyrkit WASM] Initialized".into());
}

/// Library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Resolve a video MIME type from a source URL
///
/// Exposed as a utility for hosting pages; source attachment itself leaves
/// the `type` attribute unset and relies on browser sniffing.
#[wasm_bindgen]
pub fn mime_for_url(url: &str) -> String {
    plyrkit_core::mime_for_url(url).to_string()
}
