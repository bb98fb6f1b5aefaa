//! Subscription tokens returned by [`HandlerManager::add_handler`](crate::HandlerManager::add_handler).

use crate::event_type::EventType;
use crate::handler::SharedHandler;
use crate::manager::WeakHandlerManager;
use std::cell::Cell;
use std::fmt;
use tracing::debug;

/// Undoes exactly one subscription.
///
/// Only the first [`remove_handler`](Self::remove_handler) call has an effect.
/// The registration keeps a weak link to its manager, so it never keeps the
/// manager alive and removing after the manager is gone does nothing.
pub struct HandlerRegistration {
    manager: WeakHandlerManager,
    handler: SharedHandler,
    event_type: EventType,
    removed: Cell<bool>,
}

impl HandlerRegistration {
    pub(crate) fn new(
        manager: WeakHandlerManager,
        handler: SharedHandler,
        event_type: EventType,
    ) -> Self {
        Self {
            manager,
            handler,
            event_type,
            removed: Cell::new(false),
        }
    }

    /// Unsubscribe the handler this registration was created for
    pub fn remove_handler(&self) {
        if self.removed.replace(true) {
            return;
        }

        match self.manager.upgrade() {
            Some(manager) => manager.remove_handler(&self.handler, &self.event_type),
            None => debug!(event_type = %self.event_type, "manager dropped, nothing to remove"),
        }
    }

    /// Type the handler was registered for
    pub fn event_type(&self) -> &EventType {
        &self.event_type
    }

    /// Check if [`remove_handler`](Self::remove_handler) was already called
    pub fn is_removed(&self) -> bool {
        self.removed.get()
    }
}

impl fmt::Debug for HandlerRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistration")
            .field("event_type", &self.event_type)
            .field("removed", &self.removed.get())
            .finish_non_exhaustive()
    }
}
