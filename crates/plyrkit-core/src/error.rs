//! Error types for Plyrkit Core

use crate::state::ControllerState;
use thiserror::Error;

/// Result type alias for controller operations
pub type Result<T> = std::result::Result<T, Error>;

/// Controller error types
///
/// Every failure in the mount lifecycle is non-fatal for the hosting page:
/// the browser layer reports these through console diagnostics and never
/// throws them into page code.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// No element with the requested id exists in the page, or it is not a
    /// video element.
    #[error("video element not found: #{id}")]
    ElementNotFound { id: String },

    /// The widget library failed to resolve, or resolved to something that
    /// is not a constructor.
    #[error("widget library unavailable: {0}")]
    WidgetUnavailable(String),

    /// An operation was issued before initialization completed.
    #[error("player not ready (controller is {state})")]
    NotReady { state: ControllerState },

    /// A lifecycle transition that the state machine forbids.
    #[error("invalid controller state transition: {from} -> {to}")]
    InvalidStateTransition {
        from: ControllerState,
        to: ControllerState,
    },

    /// A DOM mutation failed underneath us.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl Error {
    /// Returns the stable error code used in console diagnostics
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::ElementNotFound { .. } => "ELEMENT_NOT_FOUND",
            Error::WidgetUnavailable(_) => "WIDGET_UNAVAILABLE",
            Error::NotReady { .. } => "NOT_READY",
            Error::InvalidStateTransition { .. } => "INVALID_TRANSITION",
            Error::Dom(_) => "DOM",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        let err = Error::ElementNotFound {
            id: "player1".to_string(),
        };
        assert_eq!(err.error_code(), "ELEMENT_NOT_FOUND");

        let err = Error::NotReady {
            state: ControllerState::Loading,
        };
        assert_eq!(err.error_code(), "NOT_READY");
    }

    #[test]
    fn test_error_display() {
        let err = Error::ElementNotFound {
            id: "player1".to_string(),
        };
        assert_eq!(err.to_string(), "video element not found: #player1");

        let err = Error::InvalidStateTransition {
            from: ControllerState::Uninitialized,
            to: ControllerState::Ready,
        };
        assert_eq!(
            err.to_string(),
            "invalid controller state transition: uninitialized -> ready"
        );
    }
}
