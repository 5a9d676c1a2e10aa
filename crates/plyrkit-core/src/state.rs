//! Controller lifecycle state machine
//!
//! The original page script tracked initialization implicitly (a null player
//! handle). Here the lifecycle is explicit so that operations issued while
//! the widget library is still resolving can be rejected instead of racing.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Lifecycle state of a player controller
///
/// A controller starts `Uninitialized`, enters `Loading` while the widget
/// library resolves, and ends in `Ready` on success or `Failed` otherwise.
/// Re-initialization from `Ready` or `Failed` is permitted and goes back
/// through `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControllerState {
    /// No initialization has been attempted.
    Uninitialized,
    /// The media source is attached and the widget library is resolving.
    Loading,
    /// The widget instance exists and configuration has been applied.
    Ready,
    /// The widget library failed to resolve.
    Failed,
}

impl ControllerState {
    /// Whether the state machine permits moving to `next`
    pub fn can_transition_to(self, next: ControllerState) -> bool {
        use ControllerState::*;
        matches!(
            (self, next),
            (Uninitialized, Loading)
                | (Loading, Ready)
                | (Loading, Failed)
                // re-initialization goes back through Loading
                | (Ready, Loading)
                | (Failed, Loading)
        )
    }

    /// Validated transition, returning the new state
    pub fn transition_to(self, next: ControllerState) -> Result<ControllerState> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(Error::InvalidStateTransition {
                from: self,
                to: next,
            })
        }
    }

    /// Enter `Loading`, rejecting a mount already in flight
    ///
    /// A controller mid-load reports `NotReady` rather than a transition
    /// error: no second initialization may race the suspended one.
    pub fn begin_loading(self) -> Result<ControllerState> {
        if self == ControllerState::Loading {
            return Err(Error::NotReady { state: self });
        }
        self.transition_to(ControllerState::Loading)
    }

    /// True once initialization has fully completed
    pub fn is_ready(self) -> bool {
        self == ControllerState::Ready
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        ControllerState::Uninitialized
    }
}

impl fmt::Display for ControllerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ControllerState::Uninitialized => "uninitialized",
            ControllerState::Loading => "loading",
            ControllerState::Ready => "ready",
            ControllerState::Failed => "failed",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_transitions() {
        assert!(ControllerState::Uninitialized.can_transition_to(ControllerState::Loading));
        assert!(ControllerState::Loading.can_transition_to(ControllerState::Ready));
        assert!(ControllerState::Loading.can_transition_to(ControllerState::Failed));
    }

    #[test]
    fn test_reinitialization_is_permitted() {
        assert!(ControllerState::Ready.can_transition_to(ControllerState::Loading));
        assert!(ControllerState::Failed.can_transition_to(ControllerState::Loading));
    }

    #[test]
    fn test_invalid_transitions_are_rejected() {
        // Ready requires going through Loading
        assert!(!ControllerState::Uninitialized.can_transition_to(ControllerState::Ready));
        assert!(!ControllerState::Uninitialized.can_transition_to(ControllerState::Failed));
        assert!(!ControllerState::Ready.can_transition_to(ControllerState::Failed));
        assert!(!ControllerState::Failed.can_transition_to(ControllerState::Ready));
    }

    #[test]
    fn test_begin_loading_from_rest_states() {
        assert!(ControllerState::Uninitialized.begin_loading().is_ok());
        assert!(ControllerState::Ready.begin_loading().is_ok());
        assert!(ControllerState::Failed.begin_loading().is_ok());
    }

    #[test]
    fn test_begin_loading_rejects_inflight_mount() {
        let err = ControllerState::Loading.begin_loading().unwrap_err();
        assert_eq!(err.error_code(), "NOT_READY");
    }

    #[test]
    fn test_transition_to_reports_both_states() {
        let err = ControllerState::Uninitialized
            .transition_to(ControllerState::Ready)
            .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidStateTransition {
                from: ControllerState::Uninitialized,
                to: ControllerState::Ready,
            }
        );
    }
}
