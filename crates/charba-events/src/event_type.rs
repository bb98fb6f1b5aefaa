//! Event type identity keys.

use crate::error::{EventError, EventResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Immutable identity of a class of events.
///
/// Equality and hashing are structural on the identity string. Event kinds
/// declare one as a process-wide constant:
///
/// ```rust
/// use charba_events::EventType;
/// use once_cell::sync::Lazy;
///
/// static TYPE: Lazy<EventType> = Lazy::new(|| EventType::constant("chart:custom"));
/// assert_eq!(TYPE.value(), "chart:custom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventType(Arc<str>);

impl EventType {
    /// Create an event type, rejecting empty identities
    pub fn new(identity: impl Into<String>) -> EventResult<Self> {
        let identity = identity.into();
        if identity.trim().is_empty() {
            return Err(EventError::InvalidEventType(
                "identity must not be empty".to_string(),
            ));
        }
        Ok(Self(Arc::from(identity)))
    }

    /// Create an event type from a compile-time literal.
    ///
    /// # Panics
    ///
    /// Panics if `identity` is empty. Only meant for `Lazy` constants, where an
    /// empty literal is a bug caught on first use.
    pub fn constant(identity: &'static str) -> Self {
        assert!(
            !identity.trim().is_empty(),
            "event type constant must not be empty"
        );
        Self(Arc::from(identity))
    }

    /// The identity string
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for EventType {
    type Error = EventError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EventType {
    type Error = EventError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EventType> for String {
    fn from(value: EventType) -> Self {
        value.0.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equal_values_are_equal_types() {
        let a = EventType::new("chart:click").unwrap();
        let b = EventType::new(String::from("chart:click")).unwrap();
        assert_eq!(a, b);

        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_different_values_differ() {
        let a = EventType::new("chart:click").unwrap();
        let b = EventType::new("chart:hover").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_identity_rejected() {
        assert!(matches!(
            EventType::new(""),
            Err(EventError::InvalidEventType(_))
        ));
        assert!(EventType::new("   ").is_err());
        assert!(EventType::try_from("").is_err());
    }

    #[test]
    fn test_value_and_display() {
        let t = EventType::constant("legend:click");
        assert_eq!(t.value(), "legend:click");
        assert_eq!(t.to_string(), "legend:click");
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn test_empty_constant_panics() {
        EventType::constant("");
    }

    #[test]
    fn test_serde_as_plain_string() {
        let t = EventType::constant("chart:resize");
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"chart:resize\"");

        let back: EventType = serde_json::from_str("\"chart:resize\"").unwrap();
        assert_eq!(back, t);

        assert!(serde_json::from_str::<EventType>("\"\"").is_err());
    }
}
