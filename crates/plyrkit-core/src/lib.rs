//! Plyrkit Core - platform-free logic for mounting a Plyr player
//!
//! This crate provides everything the browser layer needs that does not
//! touch the DOM:
//! - Player configuration (control tokens, playback speed, keyboard config)
//! - Controller lifecycle state machine
//! - Media type resolution from source URLs
//! - Error types with stable diagnostic codes
//!
//! The wasm crate (`plyrkit-wasm`) layers DOM mutation and the Plyr widget
//! bindings on top of these types.

pub mod config;
pub mod error;
pub mod media;
pub mod state;

pub use config::{ControlToken, KeyboardConfig, PlayerOptions, SpeedConfig, WidgetOptions};
pub use error::{Error, Result};
pub use media::{mime_for_url, SUPPORTED_EXTENSIONS};
pub use state::ControllerState;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
