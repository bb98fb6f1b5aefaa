//! Handler churn notifications.
//!
//! A [`HandlerManager`](crate::HandlerManager) fires these when a handler of
//! [`HandlerCategory::Chart`](crate::HandlerCategory::Chart) is added or
//! removed, carrying the type that gained or lost a handler. Consumers use them
//! to hook native listeners only while somebody is listening.

use crate::error::HandlerResult;
use crate::event::{Event, EventCore};
use crate::event_type::EventType;
use crate::handler::EventHandler;
use once_cell::sync::Lazy;

static ADD_HANDLER: Lazy<EventType> = Lazy::new(|| EventType::constant("handler:add"));
static REMOVE_HANDLER: Lazy<EventType> = Lazy::new(|| EventType::constant("handler:remove"));

/// Capability for [`AddHandlerEvent`]
pub trait AddHandlerEventHandler {
    /// Invoked after a chart handler was added
    fn on_add(&self, event: &AddHandlerEvent) -> HandlerResult;
}

/// Capability for [`RemoveHandlerEvent`]
pub trait RemoveHandlerEventHandler {
    /// Invoked after a chart handler was removed
    fn on_remove(&self, event: &RemoveHandlerEvent) -> HandlerResult;
}

/// A chart handler was added for `handler_type`
#[derive(Debug)]
pub struct AddHandlerEvent {
    core: EventCore,
    handler_type: EventType,
}

impl AddHandlerEvent {
    /// Event type of add notifications
    pub fn type_key() -> &'static EventType {
        &ADD_HANDLER
    }

    /// Create the notification for `handler_type`
    pub fn new(handler_type: EventType) -> Self {
        Self {
            core: EventCore::new(Self::type_key().clone()),
            handler_type,
        }
    }

    /// Type that gained a handler
    pub fn handler_type(&self) -> &EventType {
        &self.handler_type
    }

    /// Check if the added handler is for `event_type`
    pub fn is_recognize(&self, event_type: &EventType) -> bool {
        &self.handler_type == event_type
    }

    /// Check if the added handler is for any of `types`
    pub fn is_recognize_any(&self, types: &[&EventType]) -> bool {
        types.iter().any(|t| self.is_recognize(t))
    }
}

impl Event for AddHandlerEvent {
    fn core(&self) -> &EventCore {
        &self.core
    }

    fn dispatch(&self, handler: &dyn EventHandler) -> HandlerResult {
        match handler.as_add_handler() {
            Some(handler) => handler.on_add(self),
            None => Ok(()),
        }
    }
}

/// A chart handler was removed from `handler_type`
#[derive(Debug)]
pub struct RemoveHandlerEvent {
    core: EventCore,
    handler_type: EventType,
}

impl RemoveHandlerEvent {
    /// Event type of remove notifications
    pub fn type_key() -> &'static EventType {
        &REMOVE_HANDLER
    }

    /// Create the notification for `handler_type`
    pub fn new(handler_type: EventType) -> Self {
        Self {
            core: EventCore::new(Self::type_key().clone()),
            handler_type,
        }
    }

    /// Type that lost a handler
    pub fn handler_type(&self) -> &EventType {
        &self.handler_type
    }

    /// Check if the removed handler was for `event_type`
    pub fn is_recognize(&self, event_type: &EventType) -> bool {
        &self.handler_type == event_type
    }

    /// Check if the removed handler was for any of `types`
    pub fn is_recognize_any(&self, types: &[&EventType]) -> bool {
        types.iter().any(|t| self.is_recognize(t))
    }
}

impl Event for RemoveHandlerEvent {
    fn core(&self) -> &EventCore {
        &self.core
    }

    fn dispatch(&self, handler: &dyn EventHandler) -> HandlerResult {
        match handler.as_remove_handler() {
            Some(handler) => handler.on_remove(self),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{ChartClickEvent, ChartHoverEvent, ChartResizeEvent};

    #[test]
    fn test_is_recognize() {
        let event = AddHandlerEvent::new(ChartClickEvent::type_key().clone());
        assert!(event.is_recognize(ChartClickEvent::type_key()));
        assert!(!event.is_recognize(ChartHoverEvent::type_key()));
    }

    #[test]
    fn test_is_recognize_any() {
        let event = RemoveHandlerEvent::new(ChartHoverEvent::type_key().clone());
        assert!(event.is_recognize_any(&[
            ChartClickEvent::type_key(),
            ChartHoverEvent::type_key()
        ]));
        assert!(!event.is_recognize_any(&[ChartResizeEvent::type_key()]));
        assert!(!event.is_recognize_any(&[]));
    }

    #[test]
    fn test_notifications_have_own_types() {
        assert_ne!(AddHandlerEvent::type_key(), RemoveHandlerEvent::type_key());
        let event = AddHandlerEvent::new(ChartClickEvent::type_key().clone());
        assert_eq!(event.event_type(), AddHandlerEvent::type_key());
        assert_eq!(event.handler_type(), ChartClickEvent::type_key());
    }
}
