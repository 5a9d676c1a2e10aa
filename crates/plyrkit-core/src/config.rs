//! Player configuration types
//!
//! Typed counterparts of the option objects the Plyr widget consumes:
//! control tokens for the rendered control bar, playback speed settings,
//! and the keyboard-shortcut configuration used by interaction lockout.

use serde::{Deserialize, Serialize};

/// A single UI affordance in the widget's control bar
///
/// Serializes to the kebab-case token Plyr expects (e.g. `current-time`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlToken {
    PlayLarge,
    Play,
    Restart,
    Rewind,
    FastForward,
    Progress,
    CurrentTime,
    Duration,
    Mute,
    Volume,
    Captions,
    Settings,
    Pip,
    Airplay,
    Download,
    Fullscreen,
}

impl ControlToken {
    /// The control bar rendered when the caller supplies no control set
    pub fn default_set() -> Vec<ControlToken> {
        vec![
            ControlToken::Play,
            ControlToken::Progress,
            ControlToken::CurrentTime,
            ControlToken::Mute,
            ControlToken::Volume,
            ControlToken::Settings,
            ControlToken::Fullscreen,
        ]
    }
}

/// Playback speed configuration
///
/// `selected` is applied once the widget reports readiness; `options` is the
/// set of rates offered in the widget's settings menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedConfig {
    /// Rate applied after the widget's ready event
    pub selected: f64,
    /// Rates offered to the user
    pub options: Vec<f64>,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            selected: 1.0,
            options: vec![1.0],
        }
    }
}

/// Keyboard-shortcut configuration on the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardConfig {
    /// Shortcuts active while the player has focus
    pub focused: bool,
    /// Shortcuts active page-wide
    pub global: bool,
}

impl KeyboardConfig {
    /// Configuration applied by interaction lockout: no shortcuts at all
    pub fn disabled() -> Self {
        Self {
            focused: false,
            global: false,
        }
    }
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        // Plyr's own default: focus-scoped shortcuts only
        Self {
            focused: true,
            global: false,
        }
    }
}

/// Everything a caller can hand to `initialize`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerOptions {
    /// Control bar layout; `None` resolves to `ControlToken::default_set`
    pub controls: Option<Vec<ControlToken>>,
    /// Playback speed settings
    pub speed: SpeedConfig,
    /// When false, interaction lockout is applied after configuration
    pub interactive: bool,
}

impl PlayerOptions {
    /// The control set actually handed to the widget
    pub fn resolved_controls(&self) -> Vec<ControlToken> {
        self.controls
            .clone()
            .unwrap_or_else(ControlToken::default_set)
    }

    /// The constructor-options object for the widget
    ///
    /// The speed object carries only the offerable rates; `selected` stays
    /// neutral here because the requested rate is applied on the widget's
    /// ready event, never by the constructor.
    pub fn widget_options(&self) -> WidgetOptions {
        WidgetOptions {
            controls: self.resolved_controls(),
            speed: SpeedConfig {
                selected: 1.0,
                options: self.speed.options.clone(),
            },
        }
    }
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            controls: None,
            speed: SpeedConfig::default(),
            interactive: true,
        }
    }
}

/// The subset of options passed to the widget constructor
///
/// Matches the wire shape of Plyr's options object: a `controls` array of
/// kebab-case tokens and a `speed` object with `selected` and `options`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetOptions {
    pub controls: Vec<ControlToken>,
    pub speed: SpeedConfig,
}

impl WidgetOptions {
    /// Convert to JSON, for diagnostics and non-wasm hosts
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
