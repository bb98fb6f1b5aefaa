//! Error types for the event core.

use std::fmt;
use thiserror::Error;

/// Errors surfaced by the event core.
///
/// `InvalidEventType` and `InvalidArgument` are wiring bugs raised at the
/// call site that built the bad value. `Handler` wraps a failure reported by a
/// handler callback during a fire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// An event type was built from an empty identity
    #[error("invalid event type: {0}")]
    InvalidEventType(String),

    /// A required event payload was missing or malformed
    #[error("invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// Name of the rejected argument
        argument: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// A handler callback failed while an event was being fired
    #[error("handler failed during '{event_type}' dispatch: {source}")]
    Handler {
        /// Type of the event being dispatched
        event_type: String,
        /// The handler's error
        #[source]
        source: HandlerError,
    },
}

impl EventError {
    /// Create an invalid-argument error
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// Check if this is a programmer error (bad type or payload)
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidEventType(_) | Self::InvalidArgument { .. }
        )
    }
}

/// Result type for event core operations
pub type EventResult<T> = Result<T, EventError>;

/// Error returned by a handler callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerError {
    /// Error message
    pub message: String,
}

impl HandlerError {
    /// Create a handler error with a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for HandlerError {}

/// Result returned by typed handler callbacks
pub type HandlerResult = Result<(), HandlerError>;
