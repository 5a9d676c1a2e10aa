//! Integration tests for Plyrkit Core

use plyrkit_core::{
    mime_for_url, ControlToken, ControllerState, Error, KeyboardConfig, PlayerOptions,
    SpeedConfig, SUPPORTED_EXTENSIONS,
};

// =============================================================================
// Media Type Tests
// =============================================================================

#[test]
fn test_mime_resolution_is_total() {
    // every supported extension maps, everything else defaults
    for ext in SUPPORTED_EXTENSIONS {
        let url = format!("/media/clip.{ext}");
        assert!(mime_for_url(&url).starts_with("video/"));
    }
    assert_eq!(mime_for_url("a.MP4"), "video/mp4");
    assert_eq!(mime_for_url("a.unknown"), "video/mp4");
    assert_eq!(mime_for_url("noext"), "video/mp4");
}

#[test]
fn test_mime_resolution_table() {
    assert_eq!(mime_for_url("clip.wmv"), "video/x-ms-wmv");
    assert_eq!(mime_for_url("clip.avi"), "video/avi");
    assert_eq!(mime_for_url("clip.ogg"), "video/ogg");
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_default_options() {
    let options = PlayerOptions::default();
    assert!(options.controls.is_none());
    assert!(options.interactive);
    assert_eq!(options.speed, SpeedConfig::default());
    assert_eq!(options.resolved_controls(), ControlToken::default_set());
}

#[test]
fn test_scenario_widget_options() {
    // initialize(controls=null, speed={selected:1.5, options:[1,1.5,2]})
    // builds the widget with the default control list
    let options = PlayerOptions {
        controls: None,
        speed: SpeedConfig {
            selected: 1.5,
            options: vec![1.0, 1.5, 2.0],
        },
        interactive: false,
    };

    let widget = options.widget_options();
    assert_eq!(widget.controls, ControlToken::default_set());
    assert_eq!(widget.speed.options, vec![1.0, 1.5, 2.0]);
    // the 1.5 rate is applied on the widget's ready event, not by the
    // constructor, so the constructor object stays at the neutral rate
    assert_eq!(widget.speed.selected, 1.0);
    assert_eq!(options.speed.selected, 1.5);
}

#[test]
fn test_explicit_controls_pass_through() {
    let options = PlayerOptions {
        controls: Some(vec![ControlToken::Play, ControlToken::Mute]),
        ..Default::default()
    };
    assert_eq!(
        options.widget_options().controls,
        vec![ControlToken::Play, ControlToken::Mute]
    );
}

#[test]
fn test_options_json_round_trip() {
    let options = PlayerOptions {
        controls: Some(vec![ControlToken::Play, ControlToken::CurrentTime]),
        speed: SpeedConfig {
            selected: 2.0,
            options: vec![1.0, 2.0],
        },
        interactive: false,
    };
    let json = serde_json::to_string(&options).unwrap();
    let back: PlayerOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, options);
}

#[test]
fn test_keyboard_lockout_shape() {
    let json = serde_json::to_string(&KeyboardConfig::disabled()).unwrap();
    assert_eq!(json, "{\"focused\":false,\"global\":false}");
}

// =============================================================================
// Lifecycle Tests
// =============================================================================

#[test]
fn test_lifecycle_happy_path() {
    let state = ControllerState::default();
    assert_eq!(state, ControllerState::Uninitialized);

    let state = state.transition_to(ControllerState::Loading).unwrap();
    let state = state.transition_to(ControllerState::Ready).unwrap();
    assert!(state.is_ready());
}

#[test]
fn test_lifecycle_failure_branch() {
    let state = ControllerState::Uninitialized
        .transition_to(ControllerState::Loading)
        .unwrap();
    let state = state.transition_to(ControllerState::Failed).unwrap();
    assert!(!state.is_ready());

    // a failed controller may retry initialization
    assert!(state.can_transition_to(ControllerState::Loading));
}

#[test]
fn test_reinit_passes_back_through_loading() {
    let state = ControllerState::Ready.begin_loading().unwrap();
    // mid-re-init the controller is not ready: the previous widget handle
    // and its listeners are already torn down at this point
    assert!(!state.is_ready());
    assert!(state.transition_to(ControllerState::Ready).is_ok());
}

#[test]
fn test_concurrent_initialize_reports_not_ready() {
    let err = ControllerState::Loading.begin_loading().unwrap_err();
    assert_eq!(err.error_code(), "NOT_READY");
    assert!(err.to_string().contains("loading"));
}

#[test]
fn test_lifecycle_rejects_shortcuts() {
    let err = ControllerState::Uninitialized
        .transition_to(ControllerState::Ready)
        .unwrap_err();
    assert_eq!(err.error_code(), "INVALID_TRANSITION");
}

// =============================================================================
// Error Tests
// =============================================================================

#[test]
fn test_not_ready_error_names_the_state() {
    let err = Error::NotReady {
        state: ControllerState::Loading,
    };
    assert_eq!(err.to_string(), "player not ready (controller is loading)");
    assert_eq!(err.error_code(), "NOT_READY");
}

#[test]
fn test_widget_unavailable_error() {
    let err = Error::WidgetUnavailable("module did not export a constructor".to_string());
    assert_eq!(err.error_code(), "WIDGET_UNAVAILABLE");
    assert!(err.to_string().contains("constructor"));
}
